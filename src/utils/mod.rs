// Utils compartidos

pub mod constants;
pub mod i18n;
#[cfg(target_arch = "wasm32")]
pub mod html5_qrcode_ffi;
pub mod spawn;

pub use constants::*;
pub use i18n::*;
pub use spawn::TaskSpawner;

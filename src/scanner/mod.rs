// Scanner QR: traits comunes + implementación web sobre html5-qrcode

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod traits;

pub use traits::*;

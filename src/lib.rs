// ============================================================================
// CHAVEIRO WEB - CLIENTE WASM DEL SISTEMA DE PRÉSTAMO DE LLAVES
// ============================================================================
// - ViewModels: lógica (refresco de lista, sesión de scanner QR, upload)
// - Scanner: traits de capacidades + implementación sobre html5-qrcode
// - Views / DOM: implementaciones sobre web-sys (sólo wasm32)
// - Services: SOLO comunicación HTTP
// ============================================================================

pub mod config;
pub mod errors;
pub mod models;
pub mod scanner;
pub mod state;
pub mod utils;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod services;
#[cfg(target_arch = "wasm32")]
pub mod views;

#[cfg(test)]
mod testing;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Instancia de la página; mantiene vivos ViewModels e Interval
#[cfg(target_arch = "wasm32")]
thread_local! {
    static APP: std::cell::RefCell<Option<app::App>> = std::cell::RefCell::new(None);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    use crate::config::CONFIG;

    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🔑 Chaveiro web ({})", CONFIG.environment);

    dom::on_dom_ready(|| {
        let mut app = app::App::new();
        if let Err(e) = app.mount() {
            log::error!("❌ [APP] Error montando la página: {:?}", e);
        }
        APP.with(|cell| {
            *cell.borrow_mut() = Some(app);
        });
    })
}

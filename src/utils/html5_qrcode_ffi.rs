// ============================================================================
// HTML5-QRCODE FFI - Bindings a la clase global `Html5QrcodeScanner`
// ============================================================================
// La librería se carga con <script> en la plantilla; sin estado aquí
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type Html5QrcodeScanner;

    /// Lanza si la librería no está cargada o el elemento no existe
    #[wasm_bindgen(constructor, catch)]
    pub fn new(
        element_id: &str,
        config: &JsValue,
        verbose: bool,
    ) -> Result<Html5QrcodeScanner, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn render(
        this: &Html5QrcodeScanner,
        on_success: &js_sys::Function,
        on_failure: &js_sys::Function,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn clear(this: &Html5QrcodeScanner) -> Result<js_sys::Promise, JsValue>;
}

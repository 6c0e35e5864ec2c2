// ============================================================================
// ERRORES DEL CLIENTE
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Elemento #{0} no encontrado")]
    MissingElement(String),

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Scanner error: {0}")]
    Scanner(String),

    #[error("Permission query failed: {0}")]
    Permission(String),
}

impl ClientError {
    /// Convierte una excepción JS en `ClientError::Js`
    pub fn from_js(value: &JsValue) -> Self {
        ClientError::Js(js_error_message(value))
    }
}

/// Mensaje legible de un valor lanzado desde JS (string, Error o cualquier otra cosa)
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(message) = js_sys::Reflect::get(value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
        {
            return message;
        }
    }
    format!("{:?}", value)
}

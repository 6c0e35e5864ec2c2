use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{self, LocalBoxFuture};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::{CameraPermissions, DecodeFailureFn, DecodeSuccessFn, Navigator, QrScanner, QrScannerFactory};
use crate::errors::{js_error_message, ClientError};
use crate::models::{PermissionState, ScannerConfig};
use crate::utils::html5_qrcode_ffi::Html5QrcodeScanner;

type HandlerSlot = Rc<RefCell<Option<(DecodeSuccessFn, DecodeFailureFn)>>>;

/// Scanner web sobre `Html5QrcodeScanner`.
/// Los closures JS se crean una vez; cada render() sólo cambia los handlers.
pub struct Html5QrcodeAdapter {
    inner: Html5QrcodeScanner,
    handlers: HandlerSlot,
    on_success_closure: Closure<dyn FnMut(JsValue, JsValue)>,
    on_failure_closure: Closure<dyn FnMut(JsValue)>,
}

impl Html5QrcodeAdapter {
    fn new(inner: Html5QrcodeScanner) -> Self {
        let handlers: HandlerSlot = Rc::new(RefCell::new(None));

        let on_success_closure = {
            let handlers = handlers.clone();
            Closure::wrap(Box::new(move |decoded_text: JsValue, _result: JsValue| {
                let handler = handlers.borrow().as_ref().map(|(success, _)| success.clone());
                if let Some(handler) = handler {
                    handler(decoded_text.as_string());
                }
            }) as Box<dyn FnMut(JsValue, JsValue)>)
        };

        let on_failure_closure = {
            let handlers = handlers.clone();
            Closure::wrap(Box::new(move |error: JsValue| {
                let handler = handlers.borrow().as_ref().map(|(_, failure)| failure.clone());
                if let Some(handler) = handler {
                    handler(error.as_string().unwrap_or_default());
                }
            }) as Box<dyn FnMut(JsValue)>)
        };

        Self {
            inner,
            handlers,
            on_success_closure,
            on_failure_closure,
        }
    }
}

impl QrScanner for Html5QrcodeAdapter {
    // El adapter vive en la sesión toda la página, así que los closures
    // siguen vivos aunque la librería llame después de clear()
    fn render(&self, on_success: DecodeSuccessFn, on_failure: DecodeFailureFn) {
        *self.handlers.borrow_mut() = Some((on_success, on_failure));

        if let Err(e) = self.inner.render(
            self.on_success_closure.as_ref().unchecked_ref(),
            self.on_failure_closure.as_ref().unchecked_ref(),
        ) {
            log::error!("❌ [SCANNER] render() lanzó: {}", js_error_message(&e));
        }
    }

    fn clear(&self) -> LocalBoxFuture<'static, Result<(), ClientError>> {
        match self.inner.clear() {
            Ok(promise) => Box::pin(async move {
                JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| ClientError::Scanner(js_error_message(&e)))
            }),
            Err(e) => Box::pin(future::ready(Err(ClientError::Scanner(js_error_message(&e))))),
        }
    }
}

/// Crea `Html5QrcodeScanner` con la config serializada a objeto JS
#[derive(Clone, Copy, Debug, Default)]
pub struct Html5QrcodeFactory;

impl QrScannerFactory for Html5QrcodeFactory {
    fn create(
        &self,
        element_id: &str,
        config: &ScannerConfig,
        verbose: bool,
    ) -> Result<Rc<dyn QrScanner>, ClientError> {
        let js_config = serde_wasm_bindgen::to_value(config)
            .map_err(|e| ClientError::Scanner(format!("config inválida: {}", e)))?;

        let inner = Html5QrcodeScanner::new(element_id, &js_config, verbose)
            .map_err(|e| ClientError::Scanner(js_error_message(&e)))?;

        log::info!("📷 [SCANNER] Html5QrcodeScanner creado en #{}", element_id);
        Ok(Rc::new(Html5QrcodeAdapter::new(inner)))
    }
}

/// Navegación real vía `window.location.href`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate_to(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("❌ [NAV] No hay window para navegar a {}", url);
            return;
        };
        if let Err(e) = window.location().set_href(url) {
            log::error!("❌ [NAV] No se pudo navegar a {}: {}", url, js_error_message(&e));
        }
    }
}

/// `navigator.permissions`, sólo si el navegador la expone
pub struct BrowserPermissions {
    permissions: JsValue,
}

impl BrowserPermissions {
    /// Detecta `navigator.permissions.query`; `None` si no está soportada
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let navigator = js_sys::Reflect::get(&window, &JsValue::from_str("navigator")).ok()?;
        let permissions = js_sys::Reflect::get(&navigator, &JsValue::from_str("permissions")).ok()?;
        if permissions.is_undefined() || permissions.is_null() {
            return None;
        }
        let query = js_sys::Reflect::get(&permissions, &JsValue::from_str("query")).ok()?;
        if !query.is_function() {
            return None;
        }
        Some(Self { permissions })
    }
}

impl CameraPermissions for BrowserPermissions {
    fn query_camera(&self) -> LocalBoxFuture<'static, Result<PermissionState, ClientError>> {
        let permissions = self.permissions.clone();
        Box::pin(async move {
            let to_error = |e: JsValue| ClientError::Permission(js_error_message(&e));

            let query: js_sys::Function = js_sys::Reflect::get(&permissions, &JsValue::from_str("query"))
                .map_err(to_error)?
                .dyn_into()
                .map_err(to_error)?;

            let descriptor = js_sys::Object::new();
            js_sys::Reflect::set(&descriptor, &JsValue::from_str("name"), &JsValue::from_str("camera"))
                .map_err(to_error)?;

            let promise: js_sys::Promise = query
                .call1(&permissions, &descriptor)
                .map_err(to_error)?
                .dyn_into()
                .map_err(to_error)?;

            let status = JsFuture::from(promise).await.map_err(to_error)?;
            let state = js_sys::Reflect::get(&status, &JsValue::from_str("state"))
                .map_err(to_error)?
                .as_string()
                .ok_or_else(|| ClientError::Permission("PermissionStatus sin state".to_string()))?;

            PermissionState::parse(&state)
                .ok_or_else(|| ClientError::Permission(format!("estado desconocido: {}", state)))
        })
    }
}

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::errors::ClientError;
use crate::models::{PermissionState, ScannerConfig};

/// Callback de decodificación; `None` cuando el texto no llega como string
pub type DecodeSuccessFn = Rc<dyn Fn(Option<String>)>;
/// Callback por frame sin QR (se llama a la tasa de escaneo)
pub type DecodeFailureFn = Rc<dyn Fn(String)>;

/// Scanner QR por cámara (librería externa)
pub trait QrScanner {
    /// Monta la UI de la cámara y empieza a decodificar. No bloquea:
    /// los resultados llegan por los callbacks.
    fn render(&self, on_success: DecodeSuccessFn, on_failure: DecodeFailureFn);

    /// Libera cámara y UI. La librería puede rechazar la promesa.
    fn clear(&self) -> LocalBoxFuture<'static, Result<(), ClientError>>;
}

/// Construye el scanner la primera vez que se pide un start()
pub trait QrScannerFactory {
    fn create(
        &self,
        element_id: &str,
        config: &ScannerConfig,
        verbose: bool,
    ) -> Result<Rc<dyn QrScanner>, ClientError>;
}

/// Regiones de la página que controla la sesión de escaneo
pub trait ScanView {
    fn set_actions_visible(&self, visible: bool);
    fn set_scanner_visible(&self, visible: bool);
    fn set_status(&self, message: &str);
}

/// Navegación del navegador (`window.location.href`)
pub trait Navigator {
    fn navigate_to(&self, url: &str);
}

/// Consulta del permiso de cámara (`navigator.permissions.query`)
pub trait CameraPermissions {
    fn query_camera(&self) -> LocalBoxFuture<'static, Result<PermissionState, ClientError>>;
}

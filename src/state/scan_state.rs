// ============================================================================
// SCAN STATE - Estado de la sesión de escaneo (vida de la página)
// ============================================================================

use std::rc::Rc;

use crate::models::ScanState;
use crate::scanner::QrScanner;

/// Sesión única de escaneo por página
#[derive(Default)]
pub struct ScanSession {
    pub state: ScanState,
    /// Una vez true, ningún callback posterior vuelve a navegar
    pub redirection_done: bool,
    /// Se crea en el primer start() y se reutiliza
    pub scanner: Option<Rc<dyn QrScanner>>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.state == ScanState::Running
    }

    /// Scanner a liberar si la sesión está corriendo
    pub fn scanner_to_release(&self) -> Option<Rc<dyn QrScanner>> {
        if self.is_running() {
            self.scanner.clone()
        } else {
            None
        }
    }
}

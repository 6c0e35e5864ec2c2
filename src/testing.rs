// ============================================================================
// FAKES PARA TESTS - Sustitutos deterministas de las capacidades del navegador
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::LocalSpawner;
use futures::future::{self, LocalBoxFuture};
use futures::task::LocalSpawnExt;

use crate::errors::ClientError;
use crate::models::{PermissionState, ScannerConfig};
use crate::scanner::{CameraPermissions, DecodeFailureFn, DecodeSuccessFn, Navigator, QrScanner, QrScannerFactory, ScanView};
use crate::utils::TaskSpawner;

/// Ejecuta las tareas en un `LocalPool` que el test avanza a mano
pub struct PoolSpawner(pub LocalSpawner);

impl TaskSpawner for PoolSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.0.spawn_local(task).expect("pool spawner closed");
    }
}

#[derive(Default)]
pub struct FakeScanner {
    render_calls: Cell<usize>,
    clear_calls: Cell<usize>,
    clear_fails: Cell<bool>,
    success_during_render: RefCell<Option<Option<String>>>,
    handlers: RefCell<Option<(DecodeSuccessFn, DecodeFailureFn)>>,
}

impl FakeScanner {
    pub fn render_calls(&self) -> usize {
        self.render_calls.get()
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls.get()
    }

    pub fn fail_clear(&self, fail: bool) {
        self.clear_fails.set(fail);
    }

    /// El próximo render() llamará al callback de éxito antes de volver
    pub fn succeed_during_render(&self, payload: Option<&str>) {
        *self.success_during_render.borrow_mut() = Some(payload.map(str::to_string));
    }

    pub fn emit_success(&self, payload: Option<&str>) {
        let handler = self.handlers.borrow().as_ref().map(|(success, _)| success.clone());
        if let Some(handler) = handler {
            handler(payload.map(str::to_string));
        }
    }

    pub fn emit_failure(&self, reason: &str) {
        let handler = self.handlers.borrow().as_ref().map(|(_, failure)| failure.clone());
        if let Some(handler) = handler {
            handler(reason.to_string());
        }
    }
}

impl QrScanner for FakeScanner {
    fn render(&self, on_success: DecodeSuccessFn, on_failure: DecodeFailureFn) {
        self.render_calls.set(self.render_calls.get() + 1);
        *self.handlers.borrow_mut() = Some((on_success.clone(), on_failure));

        let pending = self.success_during_render.borrow_mut().take();
        if let Some(payload) = pending {
            on_success(payload);
        }
    }

    fn clear(&self) -> LocalBoxFuture<'static, Result<(), ClientError>> {
        self.clear_calls.set(self.clear_calls.get() + 1);
        let result = if self.clear_fails.get() {
            Err(ClientError::Scanner("Cannot clear while scan is ongoing".to_string()))
        } else {
            Ok(())
        };
        Box::pin(future::ready(result))
    }
}

pub struct FakeScannerFactory {
    pub scanner: Rc<FakeScanner>,
    fail: bool,
    created: Cell<usize>,
    last_args: RefCell<Option<(String, ScannerConfig, bool)>>,
}

impl FakeScannerFactory {
    pub fn new() -> Self {
        Self {
            scanner: Rc::new(FakeScanner::default()),
            fail: false,
            created: Cell::new(0),
            last_args: RefCell::new(None),
        }
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::new() }
    }

    pub fn created(&self) -> usize {
        self.created.get()
    }

    pub fn last_args(&self) -> Option<(String, ScannerConfig, bool)> {
        self.last_args.borrow().clone()
    }
}

impl QrScannerFactory for FakeScannerFactory {
    fn create(
        &self,
        element_id: &str,
        config: &ScannerConfig,
        verbose: bool,
    ) -> Result<Rc<dyn QrScanner>, ClientError> {
        *self.last_args.borrow_mut() = Some((element_id.to_string(), config.clone(), verbose));
        if self.fail {
            return Err(ClientError::Scanner("Html5QrcodeScanner is not defined".to_string()));
        }
        self.created.set(self.created.get() + 1);
        let scanner: Rc<dyn QrScanner> = self.scanner.clone();
        Ok(scanner)
    }
}

/// Vista en memoria; arranca como la página: acciones visibles, scanner oculto
pub struct FakeScanView {
    actions_visible: Cell<bool>,
    scanner_visible: Cell<bool>,
    status_history: RefCell<Vec<String>>,
}

impl FakeScanView {
    pub fn new() -> Self {
        Self {
            actions_visible: Cell::new(true),
            scanner_visible: Cell::new(false),
            status_history: RefCell::new(Vec::new()),
        }
    }

    pub fn actions_visible(&self) -> bool {
        self.actions_visible.get()
    }

    pub fn scanner_visible(&self) -> bool {
        self.scanner_visible.get()
    }

    pub fn status(&self) -> String {
        self.status_history.borrow().last().cloned().unwrap_or_default()
    }

    pub fn status_history(&self) -> Vec<String> {
        self.status_history.borrow().clone()
    }
}

impl ScanView for FakeScanView {
    fn set_actions_visible(&self, visible: bool) {
        self.actions_visible.set(visible);
    }

    fn set_scanner_visible(&self, visible: bool) {
        self.scanner_visible.set(visible);
    }

    fn set_status(&self, message: &str) {
        self.status_history.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub struct FakeNavigator {
    visited: RefCell<Vec<String>>,
}

impl FakeNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for FakeNavigator {
    fn navigate_to(&self, url: &str) {
        self.visited.borrow_mut().push(url.to_string());
    }
}

pub struct FakePermissions {
    answer: Result<PermissionState, ClientError>,
}

impl FakePermissions {
    pub fn answering(answer: Result<PermissionState, ClientError>) -> Self {
        Self { answer }
    }
}

impl CameraPermissions for FakePermissions {
    fn query_camera(&self) -> LocalBoxFuture<'static, Result<PermissionState, ClientError>> {
        Box::pin(future::ready(self.answer.clone()))
    }
}

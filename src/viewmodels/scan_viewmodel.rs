// ============================================================================
// SCAN VIEWMODEL - Sesión de escaneo QR por vídeo
// ============================================================================
// start / cancel / éxito / permiso. El scanner, la vista, la navegación y
// el spawner se inyectan, así la lógica no depende del DOM ni de la cámara.
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::config::ScannerSettings;
use crate::models::{PermissionState, ScanState, ScannerConfig};
use crate::scanner::{CameraPermissions, DecodeFailureFn, DecodeSuccessFn, Navigator, QrScanner, QrScannerFactory, ScanView};
use crate::state::ScanSession;
use crate::utils::{ScanMessages, TaskSpawner};

/// Dependencias inyectadas en el ViewModel
pub struct ScanDeps {
    pub factory: Rc<dyn QrScannerFactory>,
    pub view: Rc<dyn ScanView>,
    pub navigator: Rc<dyn Navigator>,
    pub spawner: Rc<dyn TaskSpawner>,
}

struct ScanContext {
    session: RefCell<ScanSession>,
    deps: ScanDeps,
    settings: ScannerSettings,
    messages: ScanMessages,
}

/// ViewModel del scanner. Clonar es barato (comparte la misma sesión).
#[derive(Clone)]
pub struct ScanViewModel {
    inner: Rc<ScanContext>,
}

impl ScanViewModel {
    pub fn new(deps: ScanDeps, settings: ScannerSettings, messages: ScanMessages) -> Self {
        Self {
            inner: Rc::new(ScanContext {
                session: RefCell::new(ScanSession::new()),
                deps,
                settings,
                messages,
            }),
        }
    }

    pub fn state(&self) -> ScanState {
        self.inner.session.borrow().state
    }

    pub fn is_running(&self) -> bool {
        self.inner.session.borrow().is_running()
    }

    pub fn redirection_done(&self) -> bool {
        self.inner.session.borrow().redirection_done
    }

    /// Iniciar el scanner. No hace nada si ya está corriendo.
    pub fn start(&self) {
        let ctx = &self.inner;
        let view = &ctx.deps.view;

        let scanner = {
            let mut session = ctx.session.borrow_mut();
            if session.state.is_active() {
                log::debug!("📷 [SCANNER] start() ignorado: ya está corriendo");
                return;
            }

            view.set_actions_visible(false);
            view.set_scanner_visible(true);
            view.set_status(&ctx.messages.initializing);
            session.state = ScanState::Starting;

            let scanner = match session.scanner.clone() {
                Some(scanner) => scanner,
                None => match self.create_scanner() {
                    Some(scanner) => {
                        session.scanner = Some(scanner.clone());
                        scanner
                    }
                    None => {
                        session.state = ScanState::Idle;
                        view.set_status(&ctx.messages.unavailable);
                        view.set_scanner_visible(false);
                        view.set_actions_visible(true);
                        return;
                    }
                },
            };

            session.redirection_done = false;
            scanner
        };

        // Sin borrow activo: el scanner puede llamar a los callbacks durante render()
        scanner.render(self.success_handler(), self.failure_handler());

        let mut session = ctx.session.borrow_mut();
        if session.state == ScanState::Starting {
            session.state = ScanState::Running;
            view.set_status(&ctx.messages.ready);
            log::info!("📷 [SCANNER] Scanner activo");
        }
    }

    /// Callback de éxito de la librería
    pub fn on_decode_success(&self, decoded_text: Option<&str>) {
        let Some(destination) = decoded_text.filter(|text| !text.trim().is_empty()) else {
            log::debug!("📷 [SCANNER] Decodificación vacía ignorada");
            return;
        };

        let ctx = &self.inner;
        let to_release = {
            let mut session = ctx.session.borrow_mut();
            if session.redirection_done {
                return;
            }
            session.redirection_done = true;
            ctx.deps.view.set_status(&ctx.messages.detected);

            let to_release = session.scanner_to_release();
            if session.state.is_active() {
                session.state = ScanState::Succeeded;
            }
            to_release
        };

        log::info!("✅ [SCANNER] QR detectado, redirigiendo a {}", destination);
        if let Some(scanner) = to_release {
            self.release(scanner);
        }
        ctx.deps.navigator.navigate_to(destination);
    }

    /// Callback por frame sin QR: no es un error
    pub fn on_decode_failure(&self, _reason: &str) {}

    /// Cancelar el escaneo y volver a los botones de acción
    pub fn cancel(&self) {
        let ctx = &self.inner;
        let to_release = {
            let mut session = ctx.session.borrow_mut();
            let to_release = session.scanner_to_release();
            session.state = ScanState::Idle;
            to_release
        };

        if let Some(scanner) = to_release {
            log::info!("🛑 [SCANNER] Cancelado por el usuario");
            self.release(scanner);
        }

        ctx.deps.view.set_scanner_visible(false);
        ctx.deps.view.set_actions_visible(true);
    }

    /// Arranque automático si el permiso de cámara ya fue concedido
    pub async fn check_auto_start(&self, permissions: Option<Rc<dyn CameraPermissions>>) {
        let Some(permissions) = permissions else {
            log::info!("📷 [SCANNER] API de permisos no disponible, inicio manual");
            return;
        };

        match permissions.query_camera().await {
            Ok(PermissionState::Granted) => {
                log::info!("📷 [SCANNER] Permiso de cámara concedido, iniciando automáticamente");
                self.start();
            }
            Ok(PermissionState::Denied) => {
                log::warn!("🚫 [SCANNER] Permiso de cámara denegado");
                self.inner.deps.view.set_status(&self.inner.messages.permission_denied);
            }
            Ok(PermissionState::Prompt) => {
                log::debug!("📷 [SCANNER] Permiso pendiente, se pedirá al hacer click");
            }
            Err(e) => {
                log::warn!("⚠️ [SCANNER] No se pudo consultar el permiso de cámara: {}", e);
            }
        }
    }

    fn create_scanner(&self) -> Option<Rc<dyn QrScanner>> {
        let settings = &self.inner.settings;
        let config = ScannerConfig::from(settings);
        match self
            .inner
            .deps
            .factory
            .create(&settings.reader_element_id, &config, settings.verbose)
        {
            Ok(scanner) => Some(scanner),
            Err(e) => {
                log::error!("❌ [SCANNER] No se pudo crear el scanner: {}", e);
                None
            }
        }
    }

    /// Liberación best-effort: el error sólo se registra
    fn release(&self, scanner: Rc<dyn QrScanner>) {
        let cleanup = scanner.clear();
        self.inner.deps.spawner.spawn(Box::pin(async move {
            if let Err(e) = cleanup.await {
                log::error!("❌ [SCANNER] Falla al liberar el scanner: {}", e);
            }
        }));
    }

    fn success_handler(&self) -> DecodeSuccessFn {
        let weak: Weak<ScanContext> = Rc::downgrade(&self.inner);
        Rc::new(move |decoded_text: Option<String>| {
            if let Some(inner) = weak.upgrade() {
                ScanViewModel { inner }.on_decode_success(decoded_text.as_deref());
            }
        })
    }

    fn failure_handler(&self) -> DecodeFailureFn {
        let weak: Weak<ScanContext> = Rc::downgrade(&self.inner);
        Rc::new(move |reason: String| {
            if let Some(inner) = weak.upgrade() {
                ScanViewModel { inner }.on_decode_failure(&reason);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClientError;
    use crate::testing::*;
    use futures::executor::{block_on, LocalPool};

    struct Harness {
        vm: ScanViewModel,
        pool: LocalPool,
        scanner: Rc<FakeScanner>,
        factory: Rc<FakeScannerFactory>,
        view: Rc<FakeScanView>,
        navigator: Rc<FakeNavigator>,
    }

    fn harness_with(factory: FakeScannerFactory) -> Harness {
        let pool = LocalPool::new();
        let factory = Rc::new(factory);
        let scanner = factory.scanner.clone();
        let view = Rc::new(FakeScanView::new());
        let navigator = Rc::new(FakeNavigator::default());
        let deps = ScanDeps {
            factory: factory.clone(),
            view: view.clone(),
            navigator: navigator.clone(),
            spawner: Rc::new(PoolSpawner(pool.spawner())),
        };
        let vm = ScanViewModel::new(deps, ScannerSettings::default(), ScanMessages::default());
        Harness { vm, pool, scanner, factory, view, navigator }
    }

    fn harness() -> Harness {
        harness_with(FakeScannerFactory::new())
    }

    #[test]
    fn start_shows_scanner_and_renders_once() {
        let h = harness();
        h.vm.start();

        assert_eq!(h.vm.state(), ScanState::Running);
        assert!(h.vm.is_running());
        assert!(h.view.scanner_visible());
        assert!(!h.view.actions_visible());
        assert_eq!(h.view.status(), ScanMessages::default().ready);
        assert_eq!(
            h.view.status_history(),
            vec![ScanMessages::default().initializing, ScanMessages::default().ready]
        );
        assert_eq!(h.scanner.render_calls(), 1);
    }

    #[test]
    fn rapid_starts_render_exactly_once() {
        let h = harness();
        for _ in 0..5 {
            h.vm.start();
        }
        assert_eq!(h.scanner.render_calls(), 1);
        assert_eq!(h.factory.created(), 1);
    }

    #[test]
    fn scanner_is_built_with_page_settings() {
        let h = harness();
        h.vm.start();

        let (element_id, config, verbose) = h.factory.last_args().expect("factory called");
        assert_eq!(element_id, "qr-reader");
        assert_eq!(config, ScannerConfig::from(&ScannerSettings::default()));
        assert!(!verbose);
    }

    #[test]
    fn scanner_instance_is_reused_across_sessions() {
        let mut h = harness();
        h.vm.start();
        h.vm.cancel();
        h.pool.run_until_stalled();
        h.vm.start();

        assert_eq!(h.factory.created(), 1);
        assert_eq!(h.scanner.render_calls(), 2);
        assert_eq!(h.vm.state(), ScanState::Running);
    }

    #[test]
    fn burst_of_successes_navigates_once() {
        let mut h = harness();
        h.vm.start();

        for _ in 0..4 {
            h.scanner.emit_success(Some("https://chaves.local/chave/7/"));
        }
        h.pool.run_until_stalled();

        assert_eq!(h.navigator.visited(), vec!["https://chaves.local/chave/7/".to_string()]);
        assert_eq!(h.scanner.clear_calls(), 1);
        assert_eq!(h.vm.state(), ScanState::Succeeded);
        assert!(!h.vm.is_running());
        assert!(h.vm.redirection_done());
        assert_eq!(h.view.status(), ScanMessages::default().detected);
    }

    #[test]
    fn empty_or_missing_payload_never_navigates() {
        let mut h = harness();
        h.vm.start();

        h.scanner.emit_success(None);
        h.scanner.emit_success(Some(""));
        h.scanner.emit_success(Some("   "));
        h.pool.run_until_stalled();

        assert!(h.navigator.visited().is_empty());
        assert_eq!(h.scanner.clear_calls(), 0);
        assert_eq!(h.vm.state(), ScanState::Running);
        assert!(!h.vm.redirection_done());
    }

    #[test]
    fn release_failure_still_navigates() {
        let mut h = harness();
        h.scanner.fail_clear(true);
        h.vm.start();

        h.scanner.emit_success(Some("/chave/3/"));
        h.pool.run_until_stalled();

        assert_eq!(h.navigator.visited(), vec!["/chave/3/".to_string()]);
        assert_eq!(h.scanner.clear_calls(), 1);
        assert_eq!(h.vm.state(), ScanState::Succeeded);
    }

    #[test]
    fn decode_failures_are_ignored() {
        let mut h = harness();
        h.vm.start();

        for _ in 0..20 {
            h.scanner.emit_failure("No MultiFormat Readers were able to detect the code.");
        }
        h.pool.run_until_stalled();

        assert_eq!(h.vm.state(), ScanState::Running);
        assert!(h.navigator.visited().is_empty());
        assert_eq!(h.view.status(), ScanMessages::default().ready);
    }

    #[test]
    fn cancel_while_running_releases_and_restores_actions() {
        let mut h = harness();
        h.vm.start();
        h.vm.cancel();
        h.pool.run_until_stalled();

        assert_eq!(h.vm.state(), ScanState::Idle);
        assert_eq!(h.scanner.clear_calls(), 1);
        assert!(h.view.actions_visible());
        assert!(!h.view.scanner_visible());
    }

    #[test]
    fn cancel_while_idle_issues_no_release() {
        let mut h = harness();
        h.vm.cancel();
        h.pool.run_until_stalled();

        assert_eq!(h.vm.state(), ScanState::Idle);
        assert_eq!(h.scanner.clear_calls(), 0);
        assert_eq!(h.factory.created(), 0);
        assert!(h.view.actions_visible());
        assert!(!h.view.scanner_visible());
    }

    #[test]
    fn restart_after_success_resets_redirection_guard() {
        let mut h = harness();
        h.vm.start();
        h.scanner.emit_success(Some("/chave/1/"));
        h.pool.run_until_stalled();

        h.vm.start();
        assert!(!h.vm.redirection_done());
        h.scanner.emit_success(Some("/chave/2/"));
        h.pool.run_until_stalled();

        assert_eq!(
            h.navigator.visited(),
            vec!["/chave/1/".to_string(), "/chave/2/".to_string()]
        );
    }

    #[test]
    fn success_during_render_is_not_overwritten() {
        let mut h = harness();
        h.scanner.succeed_during_render(Some("/chave/5/"));
        h.vm.start();
        h.pool.run_until_stalled();

        assert_eq!(h.vm.state(), ScanState::Succeeded);
        assert_eq!(h.navigator.visited(), vec!["/chave/5/".to_string()]);
        // No estaba Running todavía: no hay nada que liberar
        assert_eq!(h.scanner.clear_calls(), 0);
        assert_eq!(h.view.status(), ScanMessages::default().detected);
    }

    #[test]
    fn factory_failure_returns_to_actions() {
        let h = harness_with(FakeScannerFactory::failing());
        h.vm.start();

        assert_eq!(h.vm.state(), ScanState::Idle);
        assert!(h.view.actions_visible());
        assert!(!h.view.scanner_visible());
        assert_eq!(h.view.status(), ScanMessages::default().unavailable);
        assert_eq!(h.scanner.render_calls(), 0);
    }

    #[test]
    fn granted_permission_starts_without_click() {
        let h = harness();
        let permissions: Rc<dyn CameraPermissions> = Rc::new(FakePermissions::answering(Ok(PermissionState::Granted)));

        block_on(h.vm.check_auto_start(Some(permissions)));

        assert_eq!(h.vm.state(), ScanState::Running);
        assert_eq!(h.scanner.render_calls(), 1);
    }

    #[test]
    fn denied_permission_shows_message_and_waits() {
        let h = harness();
        let permissions: Rc<dyn CameraPermissions> = Rc::new(FakePermissions::answering(Ok(PermissionState::Denied)));

        block_on(h.vm.check_auto_start(Some(permissions)));

        assert_eq!(h.vm.state(), ScanState::Idle);
        assert_eq!(h.view.status(), ScanMessages::default().permission_denied);
        assert_eq!(h.scanner.render_calls(), 0);
        assert!(h.view.actions_visible());
    }

    #[test]
    fn prompt_failure_or_missing_api_do_nothing() {
        let h = harness();
        let prompt: Rc<dyn CameraPermissions> = Rc::new(FakePermissions::answering(Ok(PermissionState::Prompt)));
        let broken: Rc<dyn CameraPermissions> = Rc::new(FakePermissions::answering(Err(ClientError::Permission(
            "'camera' is not a valid value for enumeration PermissionName.".to_string(),
        ))));

        block_on(h.vm.check_auto_start(Some(prompt)));
        block_on(h.vm.check_auto_start(Some(broken)));
        block_on(h.vm.check_auto_start(None));

        assert_eq!(h.vm.state(), ScanState::Idle);
        assert_eq!(h.scanner.render_calls(), 0);
        assert!(h.view.status_history().is_empty());
    }

    #[test]
    fn late_success_after_cancel_keeps_idle() {
        let mut h = harness();
        h.vm.start();
        h.vm.cancel();
        h.pool.run_until_stalled();

        h.scanner.emit_success(Some("/chave/4/"));
        h.pool.run_until_stalled();

        assert_eq!(h.vm.state(), ScanState::Idle);
        assert_eq!(h.navigator.visited(), vec!["/chave/4/".to_string()]);
        // Sólo la liberación del cancel
        assert_eq!(h.scanner.clear_calls(), 1);
        assert!(h.view.actions_visible());
        assert!(!h.view.scanner_visible());
    }

    #[test]
    fn callbacks_after_drop_are_harmless() {
        let h = harness();
        h.vm.start();
        let scanner = h.scanner.clone();
        let navigator = h.navigator.clone();
        drop(h);

        scanner.emit_success(Some("/chave/9/"));
        assert!(navigator.visited().is_empty());
    }
}

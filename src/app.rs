// ============================================================================
// APP - Conecta los ViewModels con los elementos presentes en la página
// ============================================================================
// Cada plantilla trae sólo parte de los elementos: lo que falta se salta.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;

use crate::config::CONFIG;
use crate::dom::{current_pathname, first_element_by_ids, get_element_by_id, on_change, on_click};
use crate::scanner::web::{BrowserNavigator, BrowserPermissions, Html5QrcodeFactory};
use crate::scanner::CameraPermissions;
use crate::services::ApiClient;
use crate::utils::constants::{CANCEL_SCAN_BUTTON_ID, START_SCAN_BUTTON_ID};
use crate::utils::spawn::BrowserSpawner;
use crate::utils::{ScanMessages, TaskSpawner};
use crate::viewmodels::{RefreshViewModel, ScanDeps, ScanViewModel, UploadViewModel};
use crate::views::{DomLoanList, DomScanView, DomUploadForm};

/// Aplicación de página: vive en un thread_local hasta que se descarga la página
#[derive(Default)]
pub struct App {
    refresh: Option<RefreshViewModel>,
    // Al soltar el Interval se detiene el refresco
    refresh_interval: Option<Interval>,
    scan: Option<ScanViewModel>,
    upload: Option<Rc<UploadViewModel>>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self) -> Result<(), JsValue> {
        self.mount_refresh();
        self.mount_upload()?;
        self.mount_scanner()?;

        log::info!(
            "✅ [APP] Montado (refresco: {}, scanner: {}, upload: {})",
            self.refresh.is_some(),
            self.scan.is_some(),
            self.upload.is_some()
        );
        Ok(())
    }

    fn mount_refresh(&mut self) {
        let config = &CONFIG.refresh;

        let pathname = current_pathname().unwrap_or_default();
        if !RefreshViewModel::should_poll(&pathname, &config.home_path) {
            return;
        }

        let Some((container_id, container)) = first_element_by_ids(&config.container_ids) else {
            log::info!("ℹ️ [APP] Sin contenedor de empréstimos en la página, refresco desactivado");
            return;
        };

        let vm = RefreshViewModel::new(
            Rc::new(ApiClient::new(&config.endpoint)),
            Rc::new(DomLoanList::new(container)),
        );

        let tick_vm = vm.clone();
        let interval = Interval::new(config.interval_ms, move || {
            let vm = tick_vm.clone();
            BrowserSpawner.spawn(Box::pin(async move { vm.tick().await }));
        });

        log::info!(
            "⏰ [APP] Refresco de #{} cada {} ms desde {}",
            container_id,
            config.interval_ms,
            config.endpoint
        );
        self.refresh = Some(vm);
        self.refresh_interval = Some(interval);
    }

    fn mount_upload(&mut self) -> Result<(), JsValue> {
        let Some(form) = DomUploadForm::from_page() else {
            return Ok(());
        };

        let input = form.input().clone();
        let vm = Rc::new(UploadViewModel::new(Rc::new(form)));

        let handler_vm = vm.clone();
        on_change(&input, move || {
            handler_vm.on_file_selected();
        })?;

        self.upload = Some(vm);
        Ok(())
    }

    fn mount_scanner(&mut self) -> Result<(), JsValue> {
        let (Some(start_button), Some(cancel_button)) = (
            get_element_by_id(START_SCAN_BUTTON_ID),
            get_element_by_id(CANCEL_SCAN_BUTTON_ID),
        ) else {
            return Ok(());
        };

        let view = match DomScanView::from_page() {
            Ok(view) => view,
            Err(e) => {
                log::info!("ℹ️ [APP] Scanner por vídeo desactivado: {}", e);
                return Ok(());
            }
        };

        let deps = ScanDeps {
            factory: Rc::new(Html5QrcodeFactory),
            view: Rc::new(view),
            navigator: Rc::new(BrowserNavigator),
            spawner: Rc::new(BrowserSpawner),
        };
        let vm = ScanViewModel::new(
            deps,
            CONFIG.scanner.clone(),
            ScanMessages::for_language(&CONFIG.language),
        );

        {
            let vm = vm.clone();
            on_click(&start_button, move || vm.start())?;
        }
        {
            let vm = vm.clone();
            on_click(&cancel_button, move || vm.cancel())?;
        }

        let permissions = BrowserPermissions::detect().map(|p| Rc::new(p) as Rc<dyn CameraPermissions>);
        let auto_vm = vm.clone();
        BrowserSpawner.spawn(Box::pin(async move { auto_vm.check_auto_start(permissions).await }));

        self.scan = Some(vm);
        Ok(())
    }
}

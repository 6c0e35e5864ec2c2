// ============================================================================
// SCAN VIEW - Regiones del scanner por vídeo en la plantilla
// ============================================================================

use web_sys::Element;

use crate::dom::{get_element_by_id, set_text_content, set_visible};
use crate::errors::ClientError;
use crate::scanner::ScanView;
use crate::utils::constants::{SCANNER_CONTAINER_ID, SCANNER_STATUS_ID, SCAN_ACTIONS_ID};

pub struct DomScanView {
    actions: Element,
    scanner: Element,
    status: Element,
}

impl DomScanView {
    /// Falla si la plantilla no tiene alguna de las regiones
    pub fn from_page() -> Result<Self, ClientError> {
        let lookup = |id: &str| get_element_by_id(id).ok_or_else(|| ClientError::MissingElement(id.to_string()));
        Ok(Self {
            actions: lookup(SCAN_ACTIONS_ID)?,
            scanner: lookup(SCANNER_CONTAINER_ID)?,
            status: lookup(SCANNER_STATUS_ID)?,
        })
    }
}

fn apply_visibility(element: &Element, visible: bool) {
    if let Err(e) = set_visible(element, visible) {
        log::warn!("⚠️ [SCAN VIEW] No se pudo cambiar la visibilidad de #{}: {:?}", element.id(), e);
    }
}

impl ScanView for DomScanView {
    fn set_actions_visible(&self, visible: bool) {
        apply_visibility(&self.actions, visible);
    }

    fn set_scanner_visible(&self, visible: bool) {
        apply_visibility(&self.scanner, visible);
    }

    fn set_status(&self, message: &str) {
        set_text_content(&self.status, message);
    }
}

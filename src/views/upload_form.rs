// ============================================================================
// UPLOAD FORM - Formulario "ler QR de uma imagem"
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement};

use crate::dom::{get_element_by_id, set_visible};
use crate::errors::ClientError;
use crate::utils::constants::{UPLOAD_FORM_ID, UPLOAD_INPUT_ID, UPLOAD_LOADING_ID};
use crate::viewmodels::UploadForm;

pub struct DomUploadForm {
    form: HtmlFormElement,
    input: HtmlInputElement,
    loading: Element,
}

impl DomUploadForm {
    /// `None` si la página no tiene el formulario completo
    pub fn from_page() -> Option<Self> {
        let form = get_element_by_id(UPLOAD_FORM_ID)?.dyn_into::<HtmlFormElement>().ok()?;
        let input = get_element_by_id(UPLOAD_INPUT_ID)?.dyn_into::<HtmlInputElement>().ok()?;
        let loading = get_element_by_id(UPLOAD_LOADING_ID)?;
        Some(Self { form, input, loading })
    }

    pub fn input(&self) -> &Element {
        self.input.as_ref()
    }
}

impl UploadForm for DomUploadForm {
    fn selected_file_count(&self) -> u32 {
        self.input.files().map(|files| files.length()).unwrap_or(0)
    }

    fn show_loading_message(&self) {
        if let Err(e) = set_visible(&self.loading, true) {
            log::warn!("⚠️ [UPLOAD] No se pudo mostrar el mensaje de carga: {:?}", e);
        }
    }

    fn submit(&self) -> Result<(), ClientError> {
        self.form.submit().map_err(|e| ClientError::from_js(&e))
    }
}

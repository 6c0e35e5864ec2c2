// ============================================================================
// UPLOAD VIEWMODEL - Envío automático del formulario de imagen QR
// ============================================================================

use std::rc::Rc;

use crate::errors::ClientError;

/// Formulario de subida (form + input file + mensaje de carga)
pub trait UploadForm {
    fn selected_file_count(&self) -> u32;
    fn show_loading_message(&self);
    fn submit(&self) -> Result<(), ClientError>;
}

pub struct UploadViewModel {
    form: Rc<dyn UploadForm>,
}

impl UploadViewModel {
    pub fn new(form: Rc<dyn UploadForm>) -> Self {
        Self { form }
    }

    /// `change` del input: envía si hay al menos un archivo. Devuelve si se envió.
    pub fn on_file_selected(&self) -> bool {
        if self.form.selected_file_count() == 0 {
            return false;
        }

        self.form.show_loading_message();
        log::info!("📤 [UPLOAD] Enviando imagen para leer el QR");
        if let Err(e) = self.form.submit() {
            log::error!("❌ [UPLOAD] No se pudo enviar el formulario: {}", e);
            return false;
        }
        true
    }
}

// ============================================================================
// CONSTANTES - IDs del DOM y endpoints compartidos con las plantillas
// ============================================================================

/// Ruta de la página inicial (única donde se refresca la lista)
pub const HOME_PATH: &str = "/";

/// Fragmento HTML con los últimos préstamos
pub const LATEST_LOANS_ENDPOINT: &str = "/api/ultimos-emprestimos/";

/// Cabecera que marca la petición como interna (no navegación completa)
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
pub const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

pub const REFRESH_INTERVAL_MS: u32 = 60 * 1000; // 1 minuto

/// La plantilla de staff y la general usan IDs distintos para la misma lista
pub const LOAN_LIST_CONTAINER_IDS: &[&str] = &["lista-emprestimos-staff", "lista-emprestimos-container"];

// Scanner por vídeo
pub const START_SCAN_BUTTON_ID: &str = "btn-iniciar-scan-video";
pub const CANCEL_SCAN_BUTTON_ID: &str = "btn-cancelar-scan";
pub const SCANNER_CONTAINER_ID: &str = "qr-reader-container";
pub const SCANNER_STATUS_ID: &str = "qr-reader-status";
pub const SCAN_ACTIONS_ID: &str = "scan-actions-container";
/// Div donde html5-qrcode monta la cámara
pub const QR_READER_ID: &str = "qr-reader";

// Upload de imagen
pub const UPLOAD_FORM_ID: &str = "form-scan-upload";
pub const UPLOAD_INPUT_ID: &str = "qr_image_input";
pub const UPLOAD_LOADING_ID: &str = "scan-loading-message";

pub const DEFAULT_LANGUAGE: &str = "pt";

// ============================================================================
// VIEWS - Implementaciones DOM de las vistas que usan los ViewModels
// ============================================================================

pub mod scan_view;
pub mod loan_list;
pub mod upload_form;

pub use scan_view::DomScanView;
pub use loan_list::DomLoanList;
pub use upload_form::DomUploadForm;

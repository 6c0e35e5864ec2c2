pub mod scan_viewmodel;
pub mod refresh_viewmodel;
pub mod upload_viewmodel;

pub use scan_viewmodel::{ScanDeps, ScanViewModel};
pub use refresh_viewmodel::{LoanListSource, LoanListTarget, RefreshViewModel};
pub use upload_viewmodel::{UploadForm, UploadViewModel};

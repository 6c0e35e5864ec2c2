pub mod scan;

pub use scan::{CameraConstraints, PermissionState, QrBox, ScanState, ScanType, ScannerConfig};

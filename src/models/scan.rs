use serde::{Serialize, Serializer};

use crate::config::ScannerSettings;

/// Estados de una sesión de escaneo por vídeo
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    Idle,
    Starting,
    Running,
    /// Terminal: se decodificó un QR y se navegó a su URL
    Succeeded,
}

impl ScanState {
    /// Starting o Running: un nuevo start() no hace nada
    pub fn is_active(&self) -> bool {
        matches!(self, ScanState::Starting | ScanState::Running)
    }
}

impl Default for ScanState {
    fn default() -> Self {
        ScanState::Idle
    }
}

/// Estado del permiso de cámara según `navigator.permissions`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
    Prompt,
}

impl PermissionState {
    pub fn parse(state: &str) -> Option<Self> {
        match state {
            "granted" => Some(PermissionState::Granted),
            "denied" => Some(PermissionState::Denied),
            "prompt" => Some(PermissionState::Prompt),
            _ => None,
        }
    }
}

/// `Html5QrcodeScanType` (enum numérico en la librería)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanType {
    Camera = 0,
}

impl Serialize for ScanType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QrBox {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraConstraints {
    pub facing_mode: String,
}

/// Objeto de configuración que recibe `new Html5QrcodeScanner(id, config, verbose)`
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScannerConfig {
    pub fps: u32,
    pub qrbox: QrBox,
    pub remember_last_used_camera: bool,
    pub supported_scan_types: Vec<ScanType>,
    pub camera: CameraConstraints,
}

impl From<&ScannerSettings> for ScannerConfig {
    fn from(settings: &ScannerSettings) -> Self {
        Self {
            fps: settings.fps,
            qrbox: QrBox {
                width: settings.qrbox_size,
                height: settings.qrbox_size,
            },
            remember_last_used_camera: settings.remember_last_used_camera,
            supported_scan_types: vec![ScanType::Camera],
            camera: CameraConstraints {
                facing_mode: settings.facing_mode.clone(),
            },
        }
    }
}

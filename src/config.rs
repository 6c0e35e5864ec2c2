// ============================================================================
// CONFIGURACIÓN - Valores de compilación (option_env!) con defaults
// ============================================================================

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::constants::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub language: String,
    pub refresh: RefreshConfig,
    pub scanner: ScannerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            refresh: RefreshConfig::default(),
            scanner: ScannerSettings::default(),
        }
    }
}

/// Refresco periódico de la lista de préstamos
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshConfig {
    pub home_path: String,
    pub endpoint: String,
    pub interval_ms: u32,
    /// IDs candidatos del contenedor, se usa el primero que exista
    pub container_ids: Vec<String>,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            home_path: HOME_PATH.to_string(),
            endpoint: LATEST_LOANS_ENDPOINT.to_string(),
            interval_ms: REFRESH_INTERVAL_MS,
            container_ids: LOAN_LIST_CONTAINER_IDS.iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Parámetros con los que se construye `Html5QrcodeScanner`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScannerSettings {
    pub reader_element_id: String,
    pub verbose: bool,
    pub fps: u32,
    pub qrbox_size: u32,
    pub facing_mode: String,
    pub remember_last_used_camera: bool,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            reader_element_id: QR_READER_ID.to_string(),
            verbose: false,
            fps: 10,
            qrbox_size: 250,
            facing_mode: "environment".to_string(),
            remember_last_used_camera: true,
        }
    }
}

/// Parsear un valor opcional, cayendo al default si falta o es inválido
fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

fn string_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            environment: string_or(option_env!("ENVIRONMENT"), &defaults.environment),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            log_level: string_or(option_env!("LOG_LEVEL"), &defaults.log_level),
            language: string_or(option_env!("LANGUAGE"), &defaults.language),
            refresh: RefreshConfig {
                home_path: string_or(option_env!("HOME_PATH"), &defaults.refresh.home_path),
                endpoint: string_or(option_env!("LATEST_LOANS_ENDPOINT"), &defaults.refresh.endpoint),
                interval_ms: parse_or(option_env!("REFRESH_INTERVAL_MS"), defaults.refresh.interval_ms),
                container_ids: defaults.refresh.container_ids,
            },
            scanner: ScannerSettings {
                fps: parse_or(option_env!("SCANNER_FPS"), defaults.scanner.fps),
                qrbox_size: parse_or(option_env!("SCANNER_QRBOX_SIZE"), defaults.scanner.qrbox_size),
                facing_mode: string_or(option_env!("SCANNER_FACING_MODE"), &defaults.scanner.facing_mode),
                verbose: parse_or(option_env!("SCANNER_VERBOSE"), defaults.scanner.verbose),
                ..defaults.scanner
            },
        }
    }

    /// Nivel de log; valores desconocidos caen a `Info`
    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.log_level).unwrap_or(log::Level::Info)
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

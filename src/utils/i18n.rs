// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "ES" => {
            translations.insert("scan_iniciando", "Iniciando cámara...");
            translations.insert("scan_listo", "Coloque el código QR en el área de lectura.");
            translations.insert("scan_detectado", "¡Código QR detectado! Redirigiendo...");
            translations.insert("scan_permiso_denegado", "Permiso de cámara denegado. Habilítelo en la configuración.");
            translations.insert("scan_no_disponible", "No se pudo iniciar el lector de códigos QR.");
        }
        "EN" => {
            translations.insert("scan_iniciando", "Starting camera...");
            translations.insert("scan_listo", "Place the QR code inside the scan area.");
            translations.insert("scan_detectado", "QR code detected! Redirecting...");
            translations.insert("scan_permiso_denegado", "Camera permission denied. Enable it in your settings.");
            translations.insert("scan_no_disponible", "Could not start the QR code reader.");
        }
        "PT" | _ => {
            translations.insert("scan_iniciando", "Iniciando câmera...");
            translations.insert("scan_listo", "Posicione o QR Code na área de leitura.");
            translations.insert("scan_detectado", "QR Code detectado! Redirecionando...");
            translations.insert("scan_permiso_denegado", "Permissão da câmera negada. Habilite nas configurações.");
            translations.insert("scan_no_disponible", "Não foi possível iniciar o leitor de QR Code.");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave si no hay traducción para ella.
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}

/// Textos de estado del scanner, resueltos una vez al arrancar
#[derive(Debug, Clone, PartialEq)]
pub struct ScanMessages {
    pub initializing: String,
    pub ready: String,
    pub detected: String,
    pub permission_denied: String,
    pub unavailable: String,
}

impl ScanMessages {
    pub fn for_language(lang: &str) -> Self {
        Self {
            initializing: t("scan_iniciando", lang),
            ready: t("scan_listo", lang),
            detected: t("scan_detectado", lang),
            permission_denied: t("scan_permiso_denegado", lang),
            unavailable: t("scan_no_disponible", lang),
        }
    }
}

impl Default for ScanMessages {
    fn default() -> Self {
        Self::for_language(crate::utils::constants::DEFAULT_LANGUAGE)
    }
}

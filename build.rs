use std::env;
use std::fs;
use std::path::Path;

/// Claves que `AppConfig::from_env()` lee con `option_env!`
const CONFIG_KEYS: &[&str] = &[
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "LANGUAGE",
    "HOME_PATH",
    "LATEST_LOANS_ENDPOINT",
    "REFRESH_INTERVAL_MS",
    "SCANNER_FPS",
    "SCANNER_QRBOX_SIZE",
    "SCANNER_FACING_MODE",
    "SCANNER_VERBOSE",
];

fn main() {
    // Recompilar si cambia alguna variable usada en la configuración
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }

    println!("cargo:rerun-if-changed=.env");

    if let Ok(contents) = fs::read_to_string(env_file) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                println!("cargo:warning=Línea ignorada en .env: {}", line);
                continue;
            };

            let key = key.trim();
            let value = value.trim().trim_matches('"');

            if !CONFIG_KEYS.contains(&key) {
                println!("cargo:warning=Clave desconocida en .env: {}", key);
                continue;
            }

            // El entorno del proceso tiene prioridad sobre .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}

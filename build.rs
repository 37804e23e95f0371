use std::env;
use std::fs;
use std::path::Path;

/// Claves que lee `AppConfig::from_env()` vía option_env!
const CONFIG_KEYS: [&str; 10] = [
    "BACKEND_URL",
    "GOOGLE_MAPS_API_KEY",
    "PLACES_LANGUAGE",
    "NETWORK_TIMEOUT_SECONDS",
    "AUTOCOMPLETE_DEBOUNCE_MS",
    "ROUTE_WAYPOINT",
    "DEFAULT_MAP_CENTER_LAT",
    "DEFAULT_MAP_CENTER_LNG",
    "DEFAULT_MAP_ZOOM",
    "ENABLE_LOGGING",
];

/// KEY=VALUE, admitiendo comillas alrededor del valor
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let value = value.trim().trim_matches('"').trim_matches('\'');
    Some((key.trim(), value))
}

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file found. Using default config (backend http://localhost:8000, no Google Maps key).");
        println!("cargo:rerun-if-changed=build.rs");
        return;
    }

    println!("cargo:rerun-if-changed=.env");
    if let Ok(contents) = fs::read_to_string(env_file) {
        for (key, value) in contents.lines().filter_map(parse_line) {
            if !CONFIG_KEYS.contains(&key) {
                println!("cargo:warning=Ignoring unknown .env key {}", key);
                continue;
            }
            // El entorno real tiene prioridad sobre .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}

use serde::{Deserialize, Serialize};

use crate::models::GeoPoint;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub maps_config: MapsConfig,
    pub places_config: PlacesConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            enable_logging: true,
            network_timeout_seconds: 15,
            maps_config: MapsConfig::default(),
            places_config: PlacesConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    pub api_key: String,
    /// Punto de paso fijo (sin parada) de todas las rutas
    pub route_waypoint: String,
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            route_waypoint: "Piracicaba, SP".to_string(),
            default_center_lat: -23.5505,
            default_center_lng: -46.6333,
            default_zoom: 7.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    pub language: String,
    pub autocomplete_debounce_ms: u32,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            language: "pt-BR".to_string(),
            autocomplete_debounce_ms: 250,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or("http://localhost:8000").trim_end_matches('/').to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("15").parse().unwrap_or(15),
            maps_config: MapsConfig {
                api_key: option_env!("GOOGLE_MAPS_API_KEY")
                    .unwrap_or("").to_string(),
                route_waypoint: option_env!("ROUTE_WAYPOINT")
                    .unwrap_or("Piracicaba, SP").to_string(),
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("-23.5505").parse().unwrap_or(-23.5505),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("-46.6333").parse().unwrap_or(-46.6333),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("7").parse().unwrap_or(7.0),
            },
            places_config: PlacesConfig {
                language: option_env!("PLACES_LANGUAGE")
                    .unwrap_or("pt-BR").to_string(),
                autocomplete_debounce_ms: option_env!("AUTOCOMPLETE_DEBOUNCE_MS")
                    .unwrap_or("250").parse().unwrap_or(250),
            },
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Timeout de red en milisegundos (peticiones a Google Maps)
    pub fn network_timeout_ms(&self) -> u32 {
        self.network_timeout_seconds.saturating_mul(1000)
    }

    pub fn map_center(&self) -> GeoPoint {
        GeoPoint {
            lat: self.maps_config.default_center_lat,
            lng: self.maps_config.default_center_lng,
        }
    }

    /// URL absoluta de un endpoint del backend
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = AppConfig {
            backend_url: "https://api.entregas.com.br".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.endpoint("/auth/login"), "https://api.entregas.com.br/auth/login");
        assert_eq!(config.endpoint("clients"), "https://api.entregas.com.br/clients");
    }

    #[test]
    fn defaults_point_at_sao_paulo() {
        let config = AppConfig::default();
        assert_eq!(config.places_config.language, "pt-BR");
        assert_eq!(config.maps_config.route_waypoint, "Piracicaba, SP");
        assert_eq!(config.network_timeout_ms(), 15_000);
        assert!(config.map_center().lat < 0.0);
    }
}

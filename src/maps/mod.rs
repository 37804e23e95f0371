// Módulo de mapas: contratos del proveedor + implementación Google Maps para web

pub mod google;
pub mod traits;

pub use google::{GoogleDirections, GooglePlaces, GoogleRouteRenderer};
pub use traits::{DirectionsProvider, DirectionsResult, PlacesProvider, ProviderFuture, RouteRenderer};

/// Error del proveedor de mapas/lugares/rutas
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// Librería JS aún no cargada
    NotReady,
    NoResults,
    /// Estado distinto de OK devuelto por el proveedor
    Status(String),
    Timeout,
    Js(String),
}

impl ProviderError {
    /// Traduce el código de estado de Google (PlacesServiceStatus / DirectionsStatus)
    pub fn from_status(status: &str) -> Self {
        match status {
            "ZERO_RESULTS" | "NOT_FOUND" => ProviderError::NoResults,
            other => ProviderError::Status(other.to_string()),
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::NotReady => write!(f, "Maps provider is not ready"),
            ProviderError::NoResults => write!(f, "No results"),
            ProviderError::Status(status) => write!(f, "Provider status: {}", status),
            ProviderError::Timeout => write!(f, "Provider request timed out"),
            ProviderError::Js(msg) => write!(f, "JavaScript error: {}", msg),
        }
    }
}

impl std::error::Error for ProviderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_results_maps_to_no_results() {
        assert_eq!(ProviderError::from_status("ZERO_RESULTS"), ProviderError::NoResults);
        assert_eq!(
            ProviderError::from_status("OVER_QUERY_LIMIT"),
            ProviderError::Status("OVER_QUERY_LIMIT".to_string())
        );
    }
}

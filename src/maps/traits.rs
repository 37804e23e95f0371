use std::future::Future;
use std::pin::Pin;

use crate::models::{DirectionsRequest, PlaceDetails, Route, SessionToken, Suggestion};
use super::ProviderError;

/// Futuro de una llamada al proveedor. Sin `Send`: todo corre en el event loop del navegador.
pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ProviderError>> + 'a>>;

/// Proveedor de predicciones y detalle de lugares
pub trait PlacesProvider {
    /// Predicciones para `query` dentro de la sesión indicada
    fn predictions(
        &self,
        query: &str,
        session: SessionToken,
        language: &str,
    ) -> ProviderFuture<'_, Vec<Suggestion>>;

    /// Detalle (componentes, dirección formateada, geometría) de un lugar
    fn place_details(&self, place_id: &str, session: SessionToken) -> ProviderFuture<'_, PlaceDetails>;
}

/// Respuesta de direcciones: rutas tipadas + el objeto crudo que necesita el renderer
pub struct DirectionsResult<P> {
    pub routes: Vec<Route>,
    pub payload: P,
}

/// Proveedor de cálculo de rutas
pub trait DirectionsProvider {
    type Payload;

    fn route(&self, request: &DirectionsRequest) -> ProviderFuture<'_, DirectionsResult<Self::Payload>>;
}

/// Superficie que pinta las rutas sobre el mapa
pub trait RouteRenderer {
    type Payload;

    /// Pinta el resultado completo y resalta `route_index`
    fn set_directions(&mut self, payload: &Self::Payload, route_index: usize);

    /// Cambia la alternativa resaltada sin pedir nada a la red
    fn set_route_index(&mut self, route_index: usize);

    /// Quita el overlay del mapa
    fn detach(&mut self);
}

// ============================================================================
// ROUTE SELECTOR - Cálculo de ruta y elección de alternativa (sin IO)
// ============================================================================
// Dueño del estado de rutas de un mapa de entrega. La red la maneja el hook;
// aquí solo se decide qué pedir, qué respuesta vale y qué se pinta.
// ============================================================================

use crate::maps::{DirectionsResult, ProviderError, RouteRenderer};
use crate::models::{DirectionsRequest, Route, RouteSummary};

#[derive(Debug, Clone, PartialEq)]
pub enum RouteState {
    Idle,
    Computing,
    Rendered,
    Failed(ProviderError),
}

/// Petición lista para enviar al proveedor
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRoute {
    pub seq: u64,
    pub request: DirectionsRequest,
}

/// Lo que se notifica a la página tras pintar o cambiar de alternativa
#[derive(Debug, Clone, PartialEq)]
pub struct RouteReport {
    pub routes: Vec<Route>,
    pub selected_index: usize,
    pub selected: Route,
}

impl RouteReport {
    pub fn summary(&self) -> RouteSummary {
        RouteSummary::from_route(&self.selected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSelectionError {
    /// No hay rutas pintadas todavía (o el último cálculo falló)
    NotRendered,
    OutOfBounds { index: usize, len: usize },
}

impl std::fmt::Display for RouteSelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteSelectionError::NotRendered => write!(f, "No routes rendered"),
            RouteSelectionError::OutOfBounds { index, len } => {
                write!(f, "Route index {} out of bounds ({} routes)", index, len)
            }
        }
    }
}

impl std::error::Error for RouteSelectionError {}

pub struct RouteSelector<R: RouteRenderer> {
    renderer: R,
    waypoint: String,
    state: RouteState,
    routes: Vec<Route>,
    selected_index: usize,
    last_pair: Option<(String, String)>,
    seq: u64,
    detached: bool,
}

impl<R: RouteRenderer> RouteSelector<R> {
    pub fn new(renderer: R, waypoint: impl Into<String>) -> Self {
        Self {
            renderer,
            waypoint: waypoint.into(),
            state: RouteState::Idle,
            routes: Vec::new(),
            selected_index: 0,
            last_pair: None,
            seq: 0,
            detached: false,
        }
    }

    pub fn state(&self) -> &RouteState {
        &self.state
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Devuelve la petición a lanzar, o `None` si el par no cambió desde el
    /// último cálculo correcto (o en curso).
    pub fn compute_route(&mut self, origin: &str, destination: &str) -> Option<PendingRoute> {
        if self.detached {
            return None;
        }

        let pair = (origin.to_string(), destination.to_string());
        let retry = matches!(self.state, RouteState::Idle | RouteState::Failed(_));
        if !retry && self.last_pair.as_ref() == Some(&pair) {
            return None;
        }

        self.seq += 1;
        self.state = RouteState::Computing;
        self.last_pair = Some(pair);

        log::info!("🛣️ [ROUTE] Calculando ruta #{}: {} → {}", self.seq, origin, destination);

        Some(PendingRoute {
            seq: self.seq,
            request: DirectionsRequest::driving(origin, destination, &self.waypoint),
        })
    }

    /// Aplica la respuesta del proveedor. Respuestas de peticiones superadas se ignoran.
    pub fn apply_directions(
        &mut self,
        seq: u64,
        result: Result<DirectionsResult<R::Payload>, ProviderError>,
    ) -> Option<RouteReport> {
        if seq != self.seq || self.detached {
            log::debug!("⏭️ [ROUTE] Respuesta #{} obsoleta (actual #{})", seq, self.seq);
            return None;
        }

        let result = result.and_then(|r| {
            if r.routes.is_empty() {
                Err(ProviderError::NoResults)
            } else {
                Ok(r)
            }
        });

        match result {
            Ok(DirectionsResult { routes, payload }) => {
                if self.selected_index >= routes.len() {
                    self.selected_index = 0;
                }
                self.routes = routes;
                self.renderer.set_directions(&payload, self.selected_index);
                self.state = RouteState::Rendered;

                log::info!(
                    "✅ [ROUTE] {} rutas, seleccionada {}",
                    self.routes.len(),
                    self.selected_index
                );
                self.report()
            }
            Err(e) => {
                log::error!("❌ [ROUTE] Error al calcular ruta: {}", e);
                self.state = RouteState::Failed(e);
                None
            }
        }
    }

    /// Cambia la alternativa resaltada. Volver a elegir la actual no toca el renderer.
    pub fn select_route_index(&mut self, index: usize) -> Result<RouteReport, RouteSelectionError> {
        if self.state != RouteState::Rendered {
            return Err(RouteSelectionError::NotRendered);
        }
        let len = self.routes.len();
        if index >= len {
            return Err(RouteSelectionError::OutOfBounds { index, len });
        }

        if index != self.selected_index {
            self.selected_index = index;
            self.renderer.set_route_index(index);
            log::info!("🔀 [ROUTE] Alternativa {} seleccionada", index);
        }

        self.report().ok_or(RouteSelectionError::NotRendered)
    }

    /// Informe actual, si hay rutas pintadas
    pub fn report(&self) -> Option<RouteReport> {
        let selected = self.routes.get(self.selected_index)?.clone();
        Some(RouteReport {
            routes: self.routes.clone(),
            selected_index: self.selected_index,
            selected,
        })
    }

    /// Quita el overlay del mapa. Llamadas repetidas no hacen nada.
    pub fn teardown(&mut self) {
        if self.detached {
            return;
        }
        self.detached = true;
        self.renderer.detach();
    }
}

impl<R: RouteRenderer> Drop for RouteSelector<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RouteLeg, TextValue};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        SetDirections(&'static str, usize),
        SetRouteIndex(usize),
        Detach,
    }

    #[derive(Clone, Default)]
    struct FakeRenderer {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl RouteRenderer for FakeRenderer {
        type Payload = &'static str;

        fn set_directions(&mut self, payload: &&'static str, route_index: usize) {
            self.calls.borrow_mut().push(Call::SetDirections(*payload, route_index));
        }

        fn set_route_index(&mut self, route_index: usize) {
            self.calls.borrow_mut().push(Call::SetRouteIndex(route_index));
        }

        fn detach(&mut self) {
            self.calls.borrow_mut().push(Call::Detach);
        }
    }

    fn route(summary: &str) -> Route {
        Route {
            summary: summary.to_string(),
            legs: vec![RouteLeg {
                distance: Some(TextValue {
                    text: "160 km".to_string(),
                    value: 160_000.0,
                }),
                duration: Some(TextValue {
                    text: "2 h 5 min".to_string(),
                    value: 7_500.0,
                }),
                ..Default::default()
            }],
        }
    }

    fn result(payload: &'static str, n: usize) -> Result<DirectionsResult<&'static str>, ProviderError> {
        Ok(DirectionsResult {
            routes: (0..n).map(|i| route(&format!("SP-{}", i))).collect(),
            payload,
        })
    }

    fn selector() -> (RouteSelector<FakeRenderer>, Rc<RefCell<Vec<Call>>>) {
        let renderer = FakeRenderer::default();
        let calls = renderer.calls.clone();
        (RouteSelector::new(renderer, "Piracicaba, SP"), calls)
    }

    #[test]
    fn request_is_driving_with_alternatives_and_waypoint() {
        let (mut selector, _) = selector();
        let pending = selector.compute_route("Bauru, SP", "Campinas, SP").unwrap();

        assert_eq!(pending.request.origin, "Bauru, SP");
        assert_eq!(pending.request.destination, "Campinas, SP");
        assert!(pending.request.provide_route_alternatives);
        assert_eq!(pending.request.waypoints.len(), 1);
        assert_eq!(pending.request.waypoints[0].location, "Piracicaba, SP");
        assert!(!pending.request.waypoints[0].stopover);
        assert_eq!(selector.state(), &RouteState::Computing);
    }

    #[test]
    fn same_pair_is_not_recomputed() {
        let (mut selector, _) = selector();
        let pending = selector.compute_route("A", "B").unwrap();
        selector.apply_directions(pending.seq, result("p1", 2));

        assert_eq!(selector.compute_route("A", "B"), None);
        assert!(selector.compute_route("A", "C").is_some());
    }

    #[test]
    fn success_renders_and_reports_selected_route() {
        let (mut selector, calls) = selector();
        let pending = selector.compute_route("A", "B").unwrap();

        let report = selector.apply_directions(pending.seq, result("p1", 3)).unwrap();

        assert_eq!(report.routes.len(), 3);
        assert_eq!(report.selected_index, 0);
        assert_eq!(report.selected.summary, "SP-0");
        assert_eq!(report.summary().distance, "160 km");
        assert_eq!(calls.borrow().as_slice(), &[Call::SetDirections("p1", 0)]);
    }

    #[test]
    fn index_out_of_range_after_recompute_resets_to_zero() {
        let (mut selector, calls) = selector();
        let first = selector.compute_route("A", "B").unwrap();
        selector.apply_directions(first.seq, result("p1", 3));
        selector.select_route_index(2).unwrap();

        let second = selector.compute_route("A", "C").unwrap();
        let report = selector.apply_directions(second.seq, result("p2", 2)).unwrap();

        assert_eq!(report.selected_index, 0);
        assert_eq!(calls.borrow().last(), Some(&Call::SetDirections("p2", 0)));
    }

    #[test]
    fn index_in_range_survives_recompute() {
        let (mut selector, calls) = selector();
        let first = selector.compute_route("A", "B").unwrap();
        selector.apply_directions(first.seq, result("p1", 3));
        selector.select_route_index(1).unwrap();

        let second = selector.compute_route("A", "C").unwrap();
        let report = selector.apply_directions(second.seq, result("p2", 2)).unwrap();

        assert_eq!(report.selected_index, 1);
        assert_eq!(calls.borrow().last(), Some(&Call::SetDirections("p2", 1)));
    }

    #[test]
    fn selecting_current_index_is_idempotent() {
        let (mut selector, calls) = selector();
        let pending = selector.compute_route("A", "B").unwrap();
        selector.apply_directions(pending.seq, result("p1", 3));

        selector.select_route_index(1).unwrap();
        let report = selector.select_route_index(1).unwrap();

        assert_eq!(report.selected_index, 1);
        let set_index_calls = calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::SetRouteIndex(_)))
            .count();
        assert_eq!(set_index_calls, 1);
    }

    #[test]
    fn out_of_bounds_selection_is_rejected() {
        let (mut selector, _) = selector();
        let pending = selector.compute_route("A", "B").unwrap();
        selector.apply_directions(pending.seq, result("p1", 2));

        assert_eq!(
            selector.select_route_index(5),
            Err(RouteSelectionError::OutOfBounds { index: 5, len: 2 })
        );
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn selection_before_render_fails() {
        let (mut selector, _) = selector();
        assert_eq!(selector.select_route_index(0), Err(RouteSelectionError::NotRendered));
    }

    #[test]
    fn stale_response_is_ignored() {
        let (mut selector, calls) = selector();
        let first = selector.compute_route("A", "B").unwrap();
        let second = selector.compute_route("A", "C").unwrap();

        let report = selector.apply_directions(second.seq, result("p2", 2)).unwrap();
        assert_eq!(report.routes.len(), 2);

        assert_eq!(selector.apply_directions(first.seq, result("p1", 3)), None);
        assert_eq!(selector.routes().len(), 2);
        assert_eq!(calls.borrow().as_slice(), &[Call::SetDirections("p2", 0)]);
    }

    #[test]
    fn failure_leaves_renderer_untouched() {
        let (mut selector, calls) = selector();
        let pending = selector.compute_route("A", "B").unwrap();

        let report = selector.apply_directions(pending.seq, Err(ProviderError::Status("REQUEST_DENIED".into())));

        assert_eq!(report, None);
        assert!(calls.borrow().is_empty());
        assert_eq!(
            selector.state(),
            &RouteState::Failed(ProviderError::Status("REQUEST_DENIED".into()))
        );
        assert_eq!(selector.select_route_index(0), Err(RouteSelectionError::NotRendered));
    }

    #[test]
    fn empty_route_list_counts_as_no_results() {
        let (mut selector, calls) = selector();
        let pending = selector.compute_route("A", "B").unwrap();

        assert_eq!(selector.apply_directions(pending.seq, result("p1", 0)), None);
        assert_eq!(selector.state(), &RouteState::Failed(ProviderError::NoResults));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn failed_pair_can_be_retried() {
        let (mut selector, _) = selector();
        let pending = selector.compute_route("A", "B").unwrap();
        selector.apply_directions(pending.seq, Err(ProviderError::Timeout));

        assert!(selector.compute_route("A", "B").is_some());
    }

    #[test]
    fn teardown_detaches_exactly_once() {
        let (mut selector, calls) = selector();
        let pending = selector.compute_route("A", "B").unwrap();
        selector.apply_directions(pending.seq, result("p1", 1));

        selector.teardown();
        selector.teardown();
        drop(selector);

        let detaches = calls.borrow().iter().filter(|c| **c == Call::Detach).count();
        assert_eq!(detaches, 1);
    }

    #[test]
    fn drop_detaches_renderer() {
        let (selector, calls) = selector();
        drop(selector);
        assert_eq!(calls.borrow().as_slice(), &[Call::Detach]);
    }

    #[test]
    fn responses_after_teardown_are_ignored() {
        let (mut selector, calls) = selector();
        let pending = selector.compute_route("A", "B").unwrap();
        selector.teardown();

        assert_eq!(selector.apply_directions(pending.seq, result("p1", 2)), None);
        assert_eq!(calls.borrow().as_slice(), &[Call::Detach]);
    }
}

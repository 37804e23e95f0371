// ============================================================================
// USE ROUTE SELECTOR - Mapa de Google + RouteSelector
// ============================================================================
// Crea el mapa cuando la librería está lista, recalcula la ruta cuando cambia
// el par origen/destino y aplica la alternativa pedida por la página.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_maps_ready::{use_maps_ready, MapsLibrary};
use crate::maps::{DirectionsProvider, GoogleDirections, GoogleRouteRenderer};
use crate::viewmodels::{RouteReport, RouteSelector, RouteState};

type SharedSelector = Rc<RefCell<Option<RouteSelector<GoogleRouteRenderer>>>>;

/// Estado visible del mapa
#[derive(Clone, Debug, PartialEq)]
pub enum RouteStatus {
    LoadingLibrary,
    Computing,
    Ready,
    Failed(String),
}

#[derive(Clone)]
pub struct UseRouteSelectorHandle {
    pub container: NodeRef,
    pub status: RouteStatus,
}

#[hook]
pub fn use_route_selector(
    origin: String,
    destination: String,
    route_index: Option<usize>,
    on_route_info: Callback<RouteReport>,
) -> UseRouteSelectorHandle {
    let ready = use_maps_ready(MapsLibrary::Routes);
    let container = use_node_ref();
    let directions = use_memo((), |_| GoogleDirections::new(CONFIG.network_timeout_ms()));
    let selector: SharedSelector = use_mut_ref(|| None);
    let status = use_state(|| RouteStatus::LoadingLibrary);

    // Mapa + renderer: se crean una vez y se retiran al desmontar
    {
        let container = container.clone();
        let selector = selector.clone();
        use_effect_with(ready, move |ready| {
            if *ready {
                match container.cast::<web_sys::HtmlElement>() {
                    Some(element) => {
                        match GoogleRouteRenderer::new(&element, CONFIG.map_center(), CONFIG.maps_config.default_zoom) {
                            Ok(renderer) => {
                                log::info!("🗺️ [ROUTE] Mapa creado");
                                *selector.borrow_mut() =
                                    Some(RouteSelector::new(renderer, CONFIG.maps_config.route_waypoint.clone()));
                            }
                            Err(e) => log::error!("❌ [ROUTE] No se pudo crear el mapa: {}", e),
                        }
                    }
                    None => log::error!("❌ [ROUTE] Contenedor del mapa no montado"),
                }
            }

            move || {
                // Drop → teardown → overlay fuera del mapa
                selector.borrow_mut().take();
            }
        });
    }

    // Recalcular cuando cambia el par (o cuando el mapa acaba de crearse)
    {
        let selector = selector.clone();
        let status = status.clone();
        let on_route_info = on_route_info.clone();
        use_effect_with((ready, origin, destination), move |(ready, origin, destination)| {
            let pending = if *ready {
                selector
                    .borrow_mut()
                    .as_mut()
                    .and_then(|s| s.compute_route(origin, destination))
            } else {
                None
            };

            if let Some(pending) = pending {
                status.set(RouteStatus::Computing);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = directions.route(&pending.request).await;

                    let mut guard = selector.borrow_mut();
                    let Some(selector) = guard.as_mut() else { return };
                    let report = selector.apply_directions(pending.seq, result);
                    let state = selector.state().clone();
                    drop(guard);

                    match (report, state) {
                        (Some(report), _) => {
                            status.set(RouteStatus::Ready);
                            on_route_info.emit(report);
                        }
                        (None, RouteState::Failed(e)) => {
                            status.set(RouteStatus::Failed(e.to_string()));
                        }
                        // Respuesta obsoleta: manda la petición más reciente
                        (None, _) => {}
                    }
                });
            }
            || ()
        });
    }

    // Alternativa pedida por la página
    {
        let selector = selector.clone();
        use_effect_with(route_index, move |route_index| {
            if let Some(index) = *route_index {
                let result = selector.borrow_mut().as_mut().map(|s| s.select_route_index(index));
                match result {
                    Some(Ok(report)) => on_route_info.emit(report),
                    Some(Err(e)) => log::debug!("🔀 [ROUTE] Selección ignorada: {}", e),
                    None => {}
                }
            }
            || ()
        });
    }

    UseRouteSelectorHandle {
        container,
        status: (*status).clone(),
    }
}

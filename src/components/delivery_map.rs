use yew::prelude::*;

use crate::hooks::{use_route_selector, RouteStatus};
use crate::viewmodels::RouteReport;

#[derive(Properties, PartialEq)]
pub struct DeliveryMapProps {
    pub origin: AttrValue,
    pub destination: AttrValue,
    /// Alternativa a resaltar; None = la que elija el selector
    #[prop_or_default]
    pub route_index: Option<usize>,
    pub on_route_info: Callback<RouteReport>,
}

/// Mapa con la ruta origen → destino y sus alternativas
#[function_component(DeliveryMap)]
pub fn delivery_map(props: &DeliveryMapProps) -> Html {
    let route = use_route_selector(
        props.origin.to_string(),
        props.destination.to_string(),
        props.route_index,
        props.on_route_info.clone(),
    );

    let overlay = match &route.status {
        RouteStatus::LoadingLibrary => Some(html! { <p class="map-overlay">{"Carregando mapa..."}</p> }),
        RouteStatus::Computing => Some(html! { <p class="map-overlay">{"Calculando rota..."}</p> }),
        RouteStatus::Failed(e) => Some(html! {
            <p class="map-overlay map-error">{format!("Não foi possível calcular a rota ({})", e)}</p>
        }),
        RouteStatus::Ready => None,
    };

    html! {
        <div class="delivery-map">
            <div ref={route.container.clone()} class="delivery-map-canvas"></div>
            { for overlay }
        </div>
    }
}

use yew::prelude::*;

use crate::components::{DeliveryMap, PageHeader};
use crate::hooks::use_api_client;
use crate::models::DeliveryDetails;
use crate::router::AppRoute;
use crate::viewmodels::RouteReport;

#[derive(Properties, PartialEq)]
pub struct TrackDeliveryViewProps {
    pub product_id: i64,
}

#[derive(Clone, PartialEq)]
enum DeliveryState {
    Loading,
    Loaded(Box<DeliveryDetails>),
    Failed,
}

fn info_row(label: &str, value: String) -> Html {
    html! {
        <div class="info-row">
            <p class="info-label">{label.to_string()}</p>
            <p class="info-value">{value}</p>
        </div>
    }
}

#[function_component(TrackDeliveryView)]
pub fn track_delivery_view(props: &TrackDeliveryViewProps) -> Html {
    let api = use_api_client();
    let delivery = use_state(|| DeliveryState::Loading);
    let route_index = use_state(|| None::<usize>);
    let report = use_state(|| None::<RouteReport>);

    {
        let delivery = delivery.clone();
        let route_index = route_index.clone();
        let report = report.clone();
        use_effect_with(props.product_id, move |product_id| {
            let product_id = *product_id;
            delivery.set(DeliveryState::Loading);
            route_index.set(None);
            report.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api.fetch_delivery(product_id).await {
                    Ok(details) => delivery.set(DeliveryState::Loaded(Box::new(details))),
                    Err(e) => {
                        log::error!("❌ Error cargando entrega {}: {}", product_id, e);
                        delivery.set(DeliveryState::Failed);
                    }
                }
            });
            || ()
        });
    }

    let on_route_info = {
        let report = report.clone();
        Callback::from(move |info: RouteReport| report.set(Some(info)))
    };

    let details = match &*delivery {
        DeliveryState::Loading => {
            return html! {
                <div class="page">
                    <PageHeader title="Detalhes da entrega" back={AppRoute::ProductList} />
                    <p class="muted">{"Carregando..."}</p>
                </div>
            };
        }
        DeliveryState::Failed => {
            return html! {
                <div class="page">
                    <PageHeader title="Detalhes da entrega" back={AppRoute::ProductList} />
                    <p class="form-error">{"Entrega não encontrada"}</p>
                </div>
            };
        }
        DeliveryState::Loaded(details) => details,
    };

    let summary = (*report).as_ref().map(|r| r.summary());
    let loading = || "Carregando...".to_string();
    let selected_index = (*report).as_ref().map(|r| r.selected_index);

    let alternatives = (*report).as_ref().filter(|r| r.routes.len() > 1).map(|r| {
        html! {
            <div class="route-alternatives">
                <p class="info-label">{"Outras Rotas"}</p>
                { for r.routes.iter().enumerate().map(|(index, route)| {
                    let route_index = route_index.clone();
                    let variant = if Some(index) == selected_index { "btn btn-primary" } else { "btn btn-outline" };
                    html! {
                        <button
                            type="button"
                            key={index.to_string()}
                            class={variant}
                            onclick={Callback::from(move |_: MouseEvent| route_index.set(Some(index)))}
                        >
                            { if route.summary.is_empty() { format!("Rota {}", index + 1) } else { route.summary.clone() } }
                        </button>
                    }
                }) }
            </div>
        }
    });

    let status = &details.delivery;

    html! {
        <div class="page track-page">
            <PageHeader title="Detalhes da entrega" back={AppRoute::ProductList} />
            <div class="track-layout">
                <div class="track-map">
                    <DeliveryMap
                        origin={details.rota.origin.clone()}
                        destination={details.rota.destination.clone()}
                        route_index={*route_index}
                        {on_route_info}
                    />
                </div>

                <div class="track-panel">
                    <div class="track-status">
                        <span class={status.badge_class()}>{status.status.clone()}</span>
                        if let Some(delivered_at) = status.delivered_at_label() {
                            <span class="muted">{format!("Entregue em {}", delivered_at)}</span>
                        }
                    </div>

                    <section class="card">
                        <h2>{"Veículo"}</h2>
                        { info_row("Modelo", details.vehicle.modelo.clone()) }
                        { info_row("Placa", details.vehicle.placa.clone()) }
                        { info_row("Capacidade", format!("{} toneladas", details.vehicle.capacidade)) }
                    </section>

                    <section class="card">
                        <h2>{"Motorista"}</h2>
                        { info_row("Nome", details.driver.nome.clone()) }
                        { info_row("Habilitação", details.driver.habilitacao.clone()) }
                        { info_row("Email", details.driver.email.clone().unwrap_or_default()) }
                    </section>

                    <section class="card">
                        <h2>{"Produto"}</h2>
                        { info_row("Nome", details.product.nome.clone()) }
                        { info_row("Preço", details.product.formatted_price()) }
                        { info_row("Descrição", details.product.descricao.clone()) }
                    </section>

                    <section class="card">
                        <h2>{"Rota"}</h2>
                        { info_row("Origem", details.origem.clone()) }
                        { info_row("Destino", details.destino.clone()) }
                        { info_row("Resumo da Rota", summary.as_ref().map(|s| s.summary.clone()).unwrap_or_else(loading)) }
                        { info_row("Distância", summary.as_ref().map(|s| s.distance.clone()).unwrap_or_else(loading)) }
                        { info_row("Duração", summary.as_ref().map(|s| s.duration.clone()).unwrap_or_else(loading)) }
                        { for alternatives }
                    </section>
                </div>
            </div>
        </div>
    }
}

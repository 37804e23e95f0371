use yew::prelude::*;

use crate::components::PageHeader;
use crate::hooks::{use_api_client, use_navigator};
use crate::models::Product;
use crate::router::AppRoute;

#[derive(Clone, PartialEq)]
enum ListState {
    Loading,
    Loaded(Vec<Product>),
    Failed,
}

#[function_component(ProductListView)]
pub fn product_list_view() -> Html {
    let navigator = use_navigator();
    let api = use_api_client();
    let state = use_state(|| ListState::Loading);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.fetch_products().await {
                    Ok(products) => state.set(ListState::Loaded(products)),
                    Err(e) => {
                        log::error!("❌ Error cargando productos: {}", e);
                        state.set(ListState::Failed);
                    }
                }
            });
            || ()
        });
    }

    let body = match &*state {
        ListState::Loading => html! { <p class="muted">{"Carregando produtos..."}</p> },
        ListState::Failed => html! { <p class="form-error">{"Não foi possível carregar os produtos"}</p> },
        ListState::Loaded(products) if products.is_empty() => {
            html! { <p class="muted">{"Nenhum produto encontrado"}</p> }
        }
        ListState::Loaded(products) => html! {
            <div class="product-grid">
                { for products.iter().map(|product| {
                    let navigate = navigator.navigate.clone();
                    let route = AppRoute::TrackDelivery { product_id: product.id };
                    let status = product.latest_delivery().map(|delivery| html! {
                        <span class={delivery.badge_class()}>{delivery.status.clone()}</span>
                    });
                    html! {
                        <div key={product.id.to_string()} class="card product-card">
                            <div class="product-card-header">
                                <h2>{product.nome.clone()}</h2>
                                <span class="price">{product.formatted_price()}</span>
                            </div>
                            <p>{format!("Motorista: {}", product.driver_label())}</p>
                            <p>{format!("Destino: {}", product.destination_label())}</p>
                            { for status }
                            <p class="muted">{format!("Quantidade: {}", product.quantidade_estoque)}</p>
                            <button
                                type="button"
                                class="btn btn-primary btn-block"
                                onclick={Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))}
                            >
                                {"Ver Detalhes"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        },
    };

    html! {
        <div class="page">
            <PageHeader title="Meus Produtos" />
            { body }
        </div>
    }
}

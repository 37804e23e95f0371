// ============================================================================
// APP - Componente raíz: contextos + selección de página por ruta
// ============================================================================

use yew::prelude::*;

use crate::components::PrivateRoute;
use crate::hooks::{use_navigator, NavigatorProvider, SessionContextProvider};
use crate::router::AppRoute;
use crate::views::{
    AdminView, LoginView, ProductListView, RegisterClientView, RegisterProductView, RegisterVehicleView,
    TrackDeliveryView,
};

fn render_route(route: &AppRoute) -> Html {
    let page = match route {
        AppRoute::Login => return html! { <LoginView /> },
        AppRoute::AdminHome => html! { <AdminView /> },
        AppRoute::RegisterClient => html! { <RegisterClientView /> },
        AppRoute::RegisterVehicle => html! { <RegisterVehicleView /> },
        AppRoute::RegisterProduct => html! { <RegisterProductView /> },
        AppRoute::ProductList => html! { <ProductListView /> },
        AppRoute::TrackDelivery { product_id } => html! { <TrackDeliveryView product_id={*product_id} /> },
    };

    html! { <PrivateRoute role={route.required_role()}>{page}</PrivateRoute> }
}

#[function_component(Pages)]
fn pages() -> Html {
    let navigator = use_navigator();
    render_route(&navigator.route)
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <NavigatorProvider>
                <Pages />
            </NavigatorProvider>
        </SessionContextProvider>
    }
}

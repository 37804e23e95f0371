use yew::prelude::*;

use crate::components::PageHeader;
use crate::hooks::use_navigator;
use crate::router::AppRoute;

const SHORTCUTS: [(&str, &str, AppRoute); 3] = [
    ("👤", "Registrar Cliente", AppRoute::RegisterClient),
    ("🚛", "Registrar Veículo", AppRoute::RegisterVehicle),
    ("📦", "Registrar Produto", AppRoute::RegisterProduct),
];

#[function_component(AdminView)]
pub fn admin_view() -> Html {
    let navigator = use_navigator();

    html! {
        <div class="page admin-page">
            <PageHeader title="Painel Administrativo" />
            <div class="admin-grid">
                { for SHORTCUTS.iter().map(|(icon, label, route)| {
                    let navigate = navigator.navigate.clone();
                    let route = route.clone();
                    html! {
                        <button
                            type="button"
                            class="card admin-shortcut"
                            onclick={Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))}
                        >
                            <span class="admin-shortcut-icon">{*icon}</span>
                            <span>{*label}</span>
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}

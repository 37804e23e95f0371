use yew::prelude::*;

use crate::hooks::{use_current_session, use_navigator};
use crate::router::AppRoute;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    /// Ruta del botón "Voltar"; sin ella no se muestra
    #[prop_or_default]
    pub back: Option<AppRoute>,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    let navigator = use_navigator();
    let session = use_current_session();

    let on_logout = {
        let navigate = navigator.navigate.clone();
        let logout = session.map(|s| s.logout);
        Callback::from(move |_: MouseEvent| {
            if let Some(logout) = &logout {
                logout.emit(());
            }
            navigate.emit(AppRoute::Login);
        })
    };

    let back = props.back.clone().map(|route| {
        let navigate = navigator.navigate.clone();
        html! {
            <button type="button" class="btn btn-ghost" onclick={Callback::from(move |_: MouseEvent| navigate.emit(route.clone()))}>
                {"← Voltar"}
            </button>
        }
    });

    html! {
        <header class="page-header">
            { for back }
            <h1>{props.title.clone()}</h1>
            <button type="button" class="btn btn-outline" onclick={on_logout}>{"Sair"}</button>
        </header>
    }
}

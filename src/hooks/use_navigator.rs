// ============================================================================
// USE NAVIGATOR - Ruta actual + navegación (pushState / popstate)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::router::AppRoute;

#[derive(Clone, PartialEq)]
pub struct UseNavigatorHandle {
    pub route: AppRoute,
    pub navigate: Callback<AppRoute>,
}

#[derive(Properties, PartialEq)]
pub struct NavigatorProviderProps {
    pub children: Children,
}

#[function_component(NavigatorProvider)]
pub fn navigator_provider(props: &NavigatorProviderProps) -> Html {
    let route = use_state(AppRoute::current);

    // Botón atrás/adelante del navegador
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
                route.set(AppRoute::current());
            });
            let window = web_sys::window();
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window
                        .remove_event_listener_with_callback("popstate", listener.as_ref().unchecked_ref());
                }
            }
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: AppRoute| {
            if *route != next {
                next.push();
                route.set(next);
            }
        })
    };

    let handle = UseNavigatorHandle {
        route: (*route).clone(),
        navigate,
    };

    html! {
        <ContextProvider<UseNavigatorHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseNavigatorHandle>>
    }
}

/// Navegador de la app. Fuera del provider navega directamente con pushState.
#[hook]
pub fn use_navigator() -> UseNavigatorHandle {
    use_context::<UseNavigatorHandle>().unwrap_or_else(|| UseNavigatorHandle {
        route: AppRoute::current(),
        navigate: Callback::from(|next: AppRoute| next.push()),
    })
}

// ============================================================================
// SESSION CONTEXT - Compartir estado de sesión entre componentes
// ============================================================================

use yew::prelude::*;
use crate::hooks::use_session::{use_session, UseSessionHandle};
use crate::services::ApiClient;

/// Provider component que envuelve la app y proporciona el estado de sesión
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session_handle = use_session();

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Sesión actual. Fuera del provider devuelve None.
#[hook]
pub fn use_current_session() -> Option<UseSessionHandle> {
    use_context::<UseSessionHandle>()
}

/// Cliente REST autenticado con el token de la sesión actual
#[hook]
pub fn use_api_client() -> ApiClient {
    let token = use_current_session().and_then(|s| s.state.token.clone());
    ApiClient::new(token)
}

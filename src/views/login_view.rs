use yew::prelude::*;

use crate::components::LoginScreen;
use crate::hooks::{use_current_session, use_navigator};
use crate::models::Role;
use crate::router::AppRoute;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let navigator = use_navigator();
    let session = use_current_session();

    let token = session.as_ref().and_then(|s| s.state.token.clone());
    let role = session.as_ref().and_then(|s| s.state.role);

    // Sesión recién creada (o restaurada) → a su página de inicio
    {
        let navigate = navigator.navigate.clone();
        use_effect_with((token, role), move |(token, role)| {
            if token.as_deref().map(|t| !t.is_empty()).unwrap_or(false) {
                let home = AppRoute::home_for(*role);
                if home != AppRoute::Login {
                    navigate.emit(home);
                }
            }
            || ()
        });
    }

    let Some(session) = session else {
        log::error!("❌ LoginView fuera de SessionContextProvider");
        return Html::default();
    };

    let error = match (&session.state.error, session.state.is_authenticated(), role) {
        (Some(error), _, _) => Some(error.clone()),
        (None, true, Some(Role::Driver)) => Some("Motoristas usam o aplicativo móvel".to_string()),
        (None, true, None) => Some("Usuário sem perfil de acesso".to_string()),
        _ => None,
    };

    html! {
        <LoginScreen
            on_login={session.login.clone()}
            loading={session.state.loading}
            {error}
        />
    }
}

use yew::prelude::*;

use crate::hooks::{use_current_session, use_navigator};
use crate::models::Role;
use crate::router::AppRoute;
use crate::stores::SessionStore;

#[derive(Properties, PartialEq)]
pub struct PrivateRouteProps {
    /// Rol exigido; `None` basta con estar autenticado
    pub role: Option<Role>,
    pub children: Children,
}

/// Sin sesión inyectada (fuera del provider) nunca se permite el acceso
fn grants_access(session: Option<&SessionStore>, role: Option<Role>) -> bool {
    session.map(|s| s.allows(role)).unwrap_or(false)
}

/// Renderiza los hijos solo si la sesión tiene el rol indicado
#[function_component(PrivateRoute)]
pub fn private_route(props: &PrivateRouteProps) -> Html {
    let navigator = use_navigator();
    let session = use_current_session();

    let allowed = grants_access(session.as_ref().map(|s| &*s.state), props.role);

    {
        let navigate = navigator.navigate.clone();
        let route = navigator.route.clone();
        use_effect_with(allowed, move |allowed| {
            if !*allowed {
                log::warn!("🔒 Acceso denegado a {}, redirigiendo a login", route);
                navigate.emit(AppRoute::Login);
            }
            || ()
        });
    }

    if allowed {
        html! { <>{props.children.clone()}</> }
    } else {
        Html::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_prop_decides_access() {
        let client = SessionStore::authenticated("jwt", Some(Role::Client));

        assert!(grants_access(Some(&client), Some(Role::Client)));
        assert!(!grants_access(Some(&client), Some(Role::Admin)));
        assert!(grants_access(Some(&client), None));
    }

    #[test]
    fn missing_session_is_refused() {
        assert!(!grants_access(None, None));
        assert!(!grants_access(Some(&SessionStore::default()), Some(Role::Admin)));
    }
}

// ============================================================================
// ROUTER - Rutas de la app sobre history.pushState
// ============================================================================

use std::fmt;

use crate::models::Role;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    AdminHome,
    RegisterClient,
    RegisterVehicle,
    RegisterProduct,
    ProductList,
    TrackDelivery { product_id: i64 },
}

impl AppRoute {
    /// Cualquier ruta desconocida cae en Login
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            ["adm"] => AppRoute::AdminHome,
            ["adm", "register", "client"] => AppRoute::RegisterClient,
            ["adm", "register", "vehicle"] => AppRoute::RegisterVehicle,
            ["adm", "register", "product"] => AppRoute::RegisterProduct,
            ["client", "products"] => AppRoute::ProductList,
            ["client", "track", id] => match id.parse() {
                Ok(product_id) => AppRoute::TrackDelivery { product_id },
                Err(_) => AppRoute::Login,
            },
            _ => AppRoute::Login,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            AppRoute::Login => "/login".to_string(),
            AppRoute::AdminHome => "/adm".to_string(),
            AppRoute::RegisterClient => "/adm/register/client".to_string(),
            AppRoute::RegisterVehicle => "/adm/register/vehicle".to_string(),
            AppRoute::RegisterProduct => "/adm/register/product".to_string(),
            AppRoute::ProductList => "/client/products".to_string(),
            AppRoute::TrackDelivery { product_id } => format!("/client/track/{}", product_id),
        }
    }

    /// Rol exigido; `None` para rutas públicas
    pub fn required_role(&self) -> Option<Role> {
        match self {
            AppRoute::Login => None,
            AppRoute::AdminHome
            | AppRoute::RegisterClient
            | AppRoute::RegisterVehicle
            | AppRoute::RegisterProduct => Some(Role::Admin),
            AppRoute::ProductList | AppRoute::TrackDelivery { .. } => Some(Role::Client),
        }
    }

    pub fn is_public(&self) -> bool {
        self.required_role().is_none()
    }

    /// Página de inicio tras el login. Motoristas no tienen panel web.
    pub fn home_for(role: Option<Role>) -> Self {
        match role {
            Some(Role::Admin) => AppRoute::AdminHome,
            Some(Role::Client) => AppRoute::ProductList,
            Some(Role::Driver) | None => AppRoute::Login,
        }
    }

    /// Ruta actual del navegador
    pub fn current() -> Self {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .map(|path| Self::from_path(&path))
            .unwrap_or(AppRoute::Login)
    }

    /// Empuja la ruta al historial sin recargar
    pub fn push(&self) {
        let path = self.to_path();
        let pushed = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|history| history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path)));

        match pushed {
            Some(Ok(())) => log::debug!("🧭 Navegando a {}", path),
            _ => log::warn!("⚠️ No se pudo actualizar el historial ({})", path),
        }
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_round_trip() {
        let routes = [
            AppRoute::Login,
            AppRoute::AdminHome,
            AppRoute::RegisterClient,
            AppRoute::RegisterVehicle,
            AppRoute::RegisterProduct,
            AppRoute::ProductList,
            AppRoute::TrackDelivery { product_id: 12 },
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_login() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/whatever"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/client/track/abc"), AppRoute::Login);
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert_eq!(AppRoute::from_path("/adm/"), AppRoute::AdminHome);
        assert_eq!(
            AppRoute::from_path("/client/track/7?tab=map"),
            AppRoute::TrackDelivery { product_id: 7 }
        );
    }

    #[test]
    fn roles_guard_their_sections() {
        assert_eq!(AppRoute::RegisterProduct.required_role(), Some(Role::Admin));
        assert_eq!(AppRoute::TrackDelivery { product_id: 1 }.required_role(), Some(Role::Client));
        assert!(AppRoute::Login.is_public());
    }

    #[test]
    fn home_depends_on_role() {
        assert_eq!(AppRoute::home_for(Some(Role::Admin)), AppRoute::AdminHome);
        assert_eq!(AppRoute::home_for(Some(Role::Client)), AppRoute::ProductList);
        assert_eq!(AppRoute::home_for(Some(Role::Driver)), AppRoute::Login);
        assert_eq!(AppRoute::home_for(None), AppRoute::Login);
    }
}

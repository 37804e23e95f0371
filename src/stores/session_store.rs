// ============================================================================
// SESSION STORE - Sesión autenticada (token + rol)
// ============================================================================
// Estado plano compatible con use_state_handle. Se inyecta a las vistas vía
// SessionContextProvider, nunca se lee de localStorage desde un componente.
// ============================================================================

use crate::models::{LoginResponse, Role};

#[derive(Clone, Debug, PartialEq, Default)]
pub struct SessionStore {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub loading: bool,
    pub error: Option<String>,
}

impl SessionStore {
    pub fn authenticated(token: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            token: Some(token.into()),
            role,
            loading: false,
            error: None,
        }
    }

    /// Sesión a partir de la respuesta de /auth/login
    pub fn from_login(response: &LoginResponse) -> Self {
        let role = response.user_type.as_ref().and_then(Role::from_user_type);
        Self::authenticated(response.access_token.clone(), role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().map(|t| !t.is_empty()).unwrap_or(false)
    }

    /// ¿Puede esta sesión entrar en una página que exige `required`?
    pub fn allows(&self, required: Option<Role>) -> bool {
        if !self.is_authenticated() {
            return false;
        }
        match required {
            None => true,
            Some(role) => self.role == Some(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserType;

    fn login(user_type: Option<UserType>) -> LoginResponse {
        LoginResponse {
            access_token: "jwt".to_string(),
            token_type: Some("bearer".to_string()),
            user_type,
        }
    }

    #[test]
    fn anonymous_session_allows_nothing() {
        let store = SessionStore::default();
        assert!(!store.is_authenticated());
        assert!(!store.allows(None));
        assert!(!store.allows(Some(Role::Client)));
    }

    #[test]
    fn role_comes_from_user_type() {
        let store = SessionStore::from_login(&login(Some(UserType {
            is_client: true,
            is_driver: false,
            is_employee: true,
        })));
        assert_eq!(store.role, Some(Role::Admin));
        assert!(store.allows(Some(Role::Admin)));
        assert!(!store.allows(Some(Role::Client)));
    }

    #[test]
    fn missing_user_type_keeps_token_without_role() {
        let store = SessionStore::from_login(&login(None));
        assert!(store.is_authenticated());
        assert_eq!(store.role, None);
        assert!(store.allows(None));
        assert!(!store.allows(Some(Role::Admin)));
    }

    #[test]
    fn empty_token_is_not_authenticated() {
        let store = SessionStore::authenticated("", Some(Role::Client));
        assert!(!store.allows(Some(Role::Client)));
    }
}

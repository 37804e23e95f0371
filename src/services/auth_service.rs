use crate::models::Role;
use crate::services::api_client::ApiClient;
use crate::stores::SessionStore;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, ROLE_STORAGE_KEY, TOKEN_STORAGE_KEY};

/// Login contra el backend y persistencia de la sesión resultante
pub async fn perform_login(email: &str, password: &str) -> Result<SessionStore, String> {
    let response = ApiClient::new(None).login(email, password).await?;
    let session = SessionStore::from_login(&response);

    match session.role {
        Some(role) => log::info!("✅ Login correcto, rol: {}", role),
        None => log::warn!("⚠️ Login sin user_type, sesión sin rol"),
    }

    persist_session(&session);
    Ok(session)
}

pub fn persist_session(session: &SessionStore) {
    if let Some(token) = &session.token {
        if let Err(e) = save_to_storage(TOKEN_STORAGE_KEY, token) {
            log::error!("❌ {}", e);
        }
    }
    match session.role {
        Some(role) => {
            if let Err(e) = save_to_storage(ROLE_STORAGE_KEY, &role) {
                log::error!("❌ {}", e);
            }
        }
        None => remove_from_storage(ROLE_STORAGE_KEY),
    }
}

/// Sesión guardada de una visita anterior, si la hay
pub fn restore_session() -> SessionStore {
    match load_from_storage::<String>(TOKEN_STORAGE_KEY) {
        Some(token) if !token.is_empty() => {
            let role = load_from_storage::<Role>(ROLE_STORAGE_KEY);
            log::info!("💾 Sesión restaurada (rol: {:?})", role);
            SessionStore::authenticated(token, role)
        }
        _ => SessionStore::default(),
    }
}

pub fn clear_session() {
    remove_from_storage(TOKEN_STORAGE_KEY);
    remove_from_storage(ROLE_STORAGE_KEY);
    log::info!("🚪 Sesión cerrada");
}

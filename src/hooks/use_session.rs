// ============================================================================
// USE SESSION HOOK - Sesión autenticada (token + rol)
// ============================================================================
// Hook nativo de Yew. Se instancia una sola vez en SessionContextProvider;
// el resto de la app la lee con use_current_session().
// ============================================================================

use yew::prelude::*;

use crate::services::{clear_session, perform_login, restore_session};
use crate::stores::SessionStore;

#[derive(Clone, PartialEq)]
pub struct UseSessionHandle {
    pub state: UseStateHandle<SessionStore>,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_session() -> UseSessionHandle {
    let state = use_state(restore_session);

    let login = {
        let state = state.clone();
        Callback::from(move |(email, password): (String, String)| {
            let state = state.clone();
            state.set(SessionStore {
                loading: true,
                ..SessionStore::default()
            });

            wasm_bindgen_futures::spawn_local(async move {
                match perform_login(&email, &password).await {
                    Ok(session) => state.set(session),
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        state.set(SessionStore {
                            error: Some("Email ou senha inválidos".to_string()),
                            ..SessionStore::default()
                        });
                    }
                }
            });
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            clear_session();
            state.set(SessionStore::default());
        })
    };

    UseSessionHandle { state, login, logout }
}

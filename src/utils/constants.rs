/// Claves de localStorage de la sesión
pub const TOKEN_STORAGE_KEY: &str = "entregas_token";
pub const ROLE_STORAGE_KEY: &str = "entregas_role";

/// Intervalo de sondeo mientras carga el script de Google Maps
pub const MAPS_READY_POLL_MS: u32 = 200;

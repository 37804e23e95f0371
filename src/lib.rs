// ============================================================================
// ENTREGAS - Cliente web de gestión de entregas (Yew + WASM)
// ============================================================================
// - Views: páginas por ruta
// - Components / Hooks: UI reutilizable + IO (red, Google Maps, timers)
// - ViewModels: lógica pura (autocompletado, rutas, validación)
// - Services: SOLO comunicación API
// - Maps: contratos del proveedor + implementación Google Maps
// - Models: estructuras compartidas con backend
// ============================================================================

pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod maps;
pub mod models;
pub mod router;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

use crate::config::CONFIG;

/// Arranque: panic hook, logging, script de Google Maps y render de la app
pub fn run() {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Entregas starting (backend: {})", CONFIG.backend_url);

    if CONFIG.maps_config.api_key.is_empty() {
        log::warn!("⚠️ GOOGLE_MAPS_API_KEY vacía: autocompletado y mapas no estarán disponibles");
    } else if let Err(e) =
        utils::google_maps_ffi::load_maps_script(&CONFIG.maps_config.api_key, &CONFIG.places_config.language)
    {
        log::error!("❌ No se pudo cargar Google Maps: {:?}", e);
    }

    yew::Renderer::<app::App>::new().render();
}

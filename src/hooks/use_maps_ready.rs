use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::utils::google_maps_ffi;
use crate::utils::MAPS_READY_POLL_MS;

/// Qué parte de la API de Google Maps necesita el componente
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MapsLibrary {
    Places,
    Routes,
}

impl MapsLibrary {
    fn is_loaded(self) -> bool {
        match self {
            MapsLibrary::Places => google_maps_ffi::places_library_ready(),
            MapsLibrary::Routes => google_maps_ffi::routes_library_ready(),
        }
    }
}

/// `true` en cuanto la librería está cargada. Sondea mientras no lo esté.
#[hook]
pub fn use_maps_ready(library: MapsLibrary) -> bool {
    let ready = use_state(|| library.is_loaded());

    {
        let ready = ready.clone();
        use_effect_with((library, *ready), move |(library, is_ready)| {
            let library = *library;
            let interval = (!*is_ready).then(|| {
                log::debug!("⏳ [MAPS] Esperando librería {:?}", library);
                Interval::new(MAPS_READY_POLL_MS, move || {
                    if library.is_loaded() {
                        log::info!("✅ [MAPS] Librería {:?} lista", library);
                        ready.set(true);
                    }
                })
            });
            move || drop(interval)
        });
    }

    *ready
}

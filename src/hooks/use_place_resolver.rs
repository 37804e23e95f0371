// ============================================================================
// USE PLACE RESOLVER - Conecta PlaceResolver con Google Places
// ============================================================================
// El resolver decide; este hook solo hace de IO: debounce, llamadas al
// proveedor y re-render. Sin borrows del RefCell a través de un await.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_maps_ready::{use_maps_ready, MapsLibrary};
use crate::maps::{GooglePlaces, PlacesProvider};
use crate::models::{PlaceSelection, Suggestion};
use crate::viewmodels::{DetailsTicket, NavigationKey, PlaceResolver, PredictionTicket};

#[derive(Clone)]
pub struct UsePlaceResolverHandle {
    pub input: String,
    pub suggestions: Vec<Suggestion>,
    pub highlighted: Option<usize>,
    pub ready: bool,
    pub on_input: Callback<String>,
    pub on_keydown: Callback<KeyboardEvent>,
    pub on_activate: Callback<String>,
    pub on_clear: Callback<()>,
}

fn fetch_predictions(
    provider: Rc<GooglePlaces>,
    resolver: Rc<RefCell<PlaceResolver>>,
    ticket: PredictionTicket,
    rerender: UseForceUpdateHandle,
) {
    // El texto pudo cambiar mientras corría el debounce
    if !resolver.borrow().is_current(&ticket) {
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        let result = provider
            .predictions(&ticket.query, ticket.session, &CONFIG.places_config.language)
            .await;
        if resolver.borrow_mut().apply_predictions(&ticket, result) {
            rerender.force_update();
        }
    });
}

fn fetch_details(
    provider: Rc<GooglePlaces>,
    resolver: Rc<RefCell<PlaceResolver>>,
    ticket: DetailsTicket,
    rerender: UseForceUpdateHandle,
    on_select: Callback<PlaceSelection>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        let result = provider.place_details(&ticket.place_id, ticket.session).await;
        let selection = resolver.borrow_mut().apply_details(&ticket, result);
        if let Some(selection) = selection {
            rerender.force_update();
            on_select.emit(selection);
        }
    });
}

#[hook]
pub fn use_place_resolver(on_select: Callback<PlaceSelection>) -> UsePlaceResolverHandle {
    let ready = use_maps_ready(MapsLibrary::Places);
    let provider = use_memo((), |_| GooglePlaces::new(CONFIG.network_timeout_ms()));
    let resolver = use_mut_ref(PlaceResolver::new);
    let debounce = use_mut_ref(|| None::<Timeout>);
    let rerender = use_force_update();

    // Al desmontar se cancela el debounce pendiente
    {
        let debounce = debounce.clone();
        use_effect_with((), move |_| {
            move || {
                debounce.borrow_mut().take();
            }
        });
    }

    let on_input = {
        let provider = provider.clone();
        let resolver = resolver.clone();
        let debounce = debounce.clone();
        let rerender = rerender.clone();
        Callback::from(move |text: String| {
            let ticket = resolver.borrow_mut().on_query_change(&text);
            rerender.force_update();

            // Reemplazar el Timeout cancela el anterior
            let mut pending = debounce.borrow_mut();
            pending.take();

            let Some(ticket) = ticket else { return };
            if !ready {
                log::debug!("⏳ [PLACES] Librería no cargada, sin predicciones");
                return;
            }

            let provider = provider.clone();
            let resolver = resolver.clone();
            let rerender = rerender.clone();
            *pending = Some(Timeout::new(CONFIG.places_config.autocomplete_debounce_ms, move || {
                fetch_predictions(provider, resolver, ticket, rerender);
            }));
        })
    };

    let on_activate = {
        let provider = provider.clone();
        let resolver = resolver.clone();
        let rerender = rerender.clone();
        let on_select = on_select.clone();
        Callback::from(move |place_id: String| {
            if !ready {
                return;
            }
            let ticket = resolver.borrow_mut().on_suggestion_activate(&place_id);
            fetch_details(provider.clone(), resolver.clone(), ticket, rerender.clone(), on_select.clone());
        })
    };

    let on_keydown = {
        let provider = provider.clone();
        let resolver = resolver.clone();
        let rerender = rerender.clone();
        let on_select = on_select.clone();
        Callback::from(move |e: KeyboardEvent| {
            let key = NavigationKey::from_key(&e.key());
            if key == NavigationKey::Other {
                return;
            }

            let outcome = resolver.borrow_mut().on_key(key);
            if outcome.prevent_default {
                e.prevent_default();
            }
            rerender.force_update();

            if let Some(ticket) = outcome.details {
                if ready {
                    fetch_details(provider.clone(), resolver.clone(), ticket, rerender.clone(), on_select.clone());
                }
            }
        })
    };

    let on_clear = {
        let resolver = resolver.clone();
        let debounce = debounce.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| {
            debounce.borrow_mut().take();
            let selection = resolver.borrow_mut().clear();
            rerender.force_update();
            on_select.emit(selection);
        })
    };

    let snapshot = resolver.borrow();
    UsePlaceResolverHandle {
        input: snapshot.input().to_string(),
        suggestions: snapshot.suggestions().to_vec(),
        highlighted: snapshot.highlighted(),
        ready,
        on_input,
        on_keydown,
        on_activate,
        on_clear,
    }
}

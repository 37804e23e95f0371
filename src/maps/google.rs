use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::{AddressComponent, DirectionsRequest, GeoPoint, PlaceDetails, Route, SessionToken, Suggestion};
use crate::utils::google_maps_ffi::{
    self, AutocompleteService, AutocompleteSessionToken, DirectionsRenderer, DirectionsService,
    GoogleMap, PlacesService,
};
use super::{DirectionsProvider, DirectionsResult, PlacesProvider, ProviderError, ProviderFuture, RouteRenderer};

const PLACE_DETAIL_FIELDS: [&str; 3] = ["address_components", "formatted_address", "geometry"];
const TIMEOUT_MARKER: &str = "__provider_timeout__";

#[derive(Deserialize)]
struct PredictionDto {
    place_id: String,
    description: String,
}

#[derive(Deserialize)]
struct PlaceResultDto {
    #[serde(default)]
    address_components: Option<Vec<AddressComponent>>,
    #[serde(default)]
    formatted_address: Option<String>,
}

#[derive(Deserialize)]
struct DirectionsResultDto {
    #[serde(default)]
    routes: Vec<Route>,
}

/// Adapta una API de callback `(results, status)` a una promesa.
/// El registro ocurre de forma síncrona dentro de `Promise::new`.
fn callback_promise(timeout_ms: u32, register: impl FnOnce(&js_sys::Function)) -> JsFuture {
    let mut register = Some(register);
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let callback = Closure::once_into_js(move |results: JsValue, status: JsValue| {
            let pair = js_sys::Array::of2(&results, &status);
            let _ = resolve.call1(&JsValue::NULL, &pair);
        });

        Timeout::new(timeout_ms, move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str(TIMEOUT_MARKER));
        })
        .forget();

        if let Some(register) = register.take() {
            register(callback.unchecked_ref());
        }
    });

    JsFuture::from(promise)
}

/// Espera la promesa de `callback_promise` y separa `(results, status)`
async fn settle_callback(pending: JsFuture) -> Result<(JsValue, String), ProviderError> {
    let value = pending.await.map_err(js_error)?;
    let pair: js_sys::Array = value.unchecked_into();
    let status = pair.get(1).as_string().unwrap_or_default();
    Ok((pair.get(0), status))
}

/// Igual que `callback_promise` pero para APIs que ya devuelven Promise
async fn promise_with_timeout(timeout_ms: u32, promise: js_sys::Promise) -> Result<JsValue, ProviderError> {
    let timeout = js_sys::Promise::new(&mut |_resolve: js_sys::Function, reject: js_sys::Function| {
        Timeout::new(timeout_ms, move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str(TIMEOUT_MARKER));
        })
        .forget();
    });

    let race = js_sys::Promise::race(&js_sys::Array::of2(&promise, &timeout));
    JsFuture::from(race).await.map_err(js_error)
}

fn js_error(value: JsValue) -> ProviderError {
    if value.as_string().as_deref() == Some(TIMEOUT_MARKER) {
        return ProviderError::Timeout;
    }
    // MapsRequestError trae `code` (p. ej. ZERO_RESULTS)
    if let Some(code) = google_maps_ffi::get_string(&value, "code") {
        return ProviderError::from_status(&code);
    }
    let message = google_maps_ffi::get_string(&value, "message")
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ProviderError::Js(message)
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, ProviderError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| ProviderError::Js(e.to_string()))
}

fn set_prop(target: &JsValue, key: &str, value: &JsValue) -> Result<(), ProviderError> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(js_error)
}

struct PlacesServices {
    autocomplete: AutocompleteService,
    details: PlacesService,
}

/// Implementación de `PlacesProvider` sobre google.maps.places
pub struct GooglePlaces {
    services: RefCell<Option<PlacesServices>>,
    /// Token JS vivo para el SessionToken actual del resolver
    session: RefCell<Option<(SessionToken, JsValue)>>,
    timeout_ms: u32,
}

impl GooglePlaces {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            services: RefCell::new(None),
            session: RefCell::new(None),
            timeout_ms,
        }
    }

    fn ensure_services(&self) -> Result<(), ProviderError> {
        if self.services.borrow().is_some() {
            return Ok(());
        }
        if !google_maps_ffi::places_library_ready() {
            return Err(ProviderError::NotReady);
        }

        // PlacesService sin mapa: se le da un <div> que nunca se monta
        let container = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ProviderError::Js("No hay document".to_string()))?
            .create_element("div")
            .map_err(js_error)?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| ProviderError::Js("No se pudo crear el contenedor".to_string()))?;

        *self.services.borrow_mut() = Some(PlacesServices {
            autocomplete: AutocompleteService::new(),
            details: PlacesService::new(&container),
        });
        log::info!("✅ [PLACES] Servicios de autocompletado inicializados");
        Ok(())
    }

    /// Crea el AutocompleteSessionToken JS la primera vez que se ve un token nuevo
    fn js_session(&self, session: SessionToken) -> JsValue {
        let mut current = self.session.borrow_mut();
        match current.as_ref() {
            Some((token, js_token)) if *token == session => js_token.clone(),
            _ => {
                let js_token: JsValue = AutocompleteSessionToken::new().into();
                log::debug!("🔑 [PLACES] Nuevo token de sesión {}", session.id());
                *current = Some((session, js_token.clone()));
                js_token
            }
        }
    }

    async fn fetch_predictions(
        &self,
        query: String,
        session: SessionToken,
        language: String,
    ) -> Result<Vec<Suggestion>, ProviderError> {
        self.ensure_services()?;

        let request = js_sys::Object::new();
        set_prop(&request, "input", &JsValue::from_str(&query))?;
        set_prop(&request, "language", &JsValue::from_str(&language))?;
        set_prop(&request, "sessionToken", &self.js_session(session))?;

        let pending = {
            let services = self.services.borrow();
            let services = services.as_ref().ok_or(ProviderError::NotReady)?;
            let pending = callback_promise(self.timeout_ms, |callback| {
                services.autocomplete.get_place_predictions(&request, callback);
            });
            pending
        };
        let (results, status) = settle_callback(pending).await?;

        if status != "OK" {
            return Err(ProviderError::from_status(&status));
        }
        if results.is_null() || results.is_undefined() {
            return Err(ProviderError::NoResults);
        }

        let predictions: Vec<PredictionDto> =
            serde_wasm_bindgen::from_value(results).map_err(|e| ProviderError::Js(e.to_string()))?;

        Ok(predictions
            .into_iter()
            .map(|p| Suggestion {
                id: p.place_id,
                label: p.description,
            })
            .collect())
    }

    async fn fetch_details(&self, place_id: String, session: SessionToken) -> Result<PlaceDetails, ProviderError> {
        self.ensure_services()?;

        let fields = js_sys::Array::new();
        for field in PLACE_DETAIL_FIELDS {
            fields.push(&JsValue::from_str(field));
        }

        let request = js_sys::Object::new();
        set_prop(&request, "placeId", &JsValue::from_str(&place_id))?;
        set_prop(&request, "fields", &fields)?;
        set_prop(&request, "sessionToken", &self.js_session(session))?;

        let pending = {
            let services = self.services.borrow();
            let services = services.as_ref().ok_or(ProviderError::NotReady)?;
            let pending = callback_promise(self.timeout_ms, |callback| {
                services.details.get_details(&request, callback);
            });
            pending
        };
        let (place, status) = settle_callback(pending).await?;

        if status != "OK" || place.is_null() || place.is_undefined() {
            return Err(ProviderError::from_status(&status));
        }

        let dto: PlaceResultDto =
            serde_wasm_bindgen::from_value(place.clone()).map_err(|e| ProviderError::Js(e.to_string()))?;

        // geometry.location es un LatLng con métodos lat()/lng()
        let location = js_sys::Reflect::get(&place, &JsValue::from_str("geometry"))
            .ok()
            .and_then(|geometry| js_sys::Reflect::get(&geometry, &JsValue::from_str("location")).ok())
            .filter(|location| !location.is_undefined() && !location.is_null())
            .and_then(|location| {
                Some(GeoPoint {
                    lat: google_maps_ffi::call_number_method(&location, "lat")?,
                    lng: google_maps_ffi::call_number_method(&location, "lng")?,
                })
            });

        Ok(PlaceDetails {
            address_components: dto.address_components.unwrap_or_default(),
            formatted_address: dto.formatted_address,
            location,
        })
    }
}

impl PlacesProvider for GooglePlaces {
    fn predictions(
        &self,
        query: &str,
        session: SessionToken,
        language: &str,
    ) -> ProviderFuture<'_, Vec<Suggestion>> {
        Box::pin(self.fetch_predictions(query.to_string(), session, language.to_string()))
    }

    fn place_details(&self, place_id: &str, session: SessionToken) -> ProviderFuture<'_, PlaceDetails> {
        Box::pin(self.fetch_details(place_id.to_string(), session))
    }
}

/// Implementación de `DirectionsProvider` sobre google.maps.DirectionsService
pub struct GoogleDirections {
    service: RefCell<Option<DirectionsService>>,
    timeout_ms: u32,
}

impl GoogleDirections {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            service: RefCell::new(None),
            timeout_ms,
        }
    }

    async fn fetch_route(&self, request: DirectionsRequest) -> Result<DirectionsResult<JsValue>, ProviderError> {
        if !google_maps_ffi::routes_library_ready() {
            return Err(ProviderError::NotReady);
        }

        let promise = {
            let mut service = self.service.borrow_mut();
            let service = service.get_or_insert_with(DirectionsService::new);
            service.route(&to_js(&request)?)
        };

        let payload = promise_with_timeout(self.timeout_ms, promise).await?;
        let dto: DirectionsResultDto =
            serde_wasm_bindgen::from_value(payload.clone()).map_err(|e| ProviderError::Js(e.to_string()))?;

        Ok(DirectionsResult {
            routes: dto.routes,
            payload,
        })
    }
}

impl DirectionsProvider for GoogleDirections {
    type Payload = JsValue;

    fn route(&self, request: &DirectionsRequest) -> ProviderFuture<'_, DirectionsResult<JsValue>> {
        Box::pin(self.fetch_route(request.clone()))
    }
}

/// Renderer de rutas sobre un google.maps.Map
pub struct GoogleRouteRenderer {
    map: GoogleMap,
    renderer: DirectionsRenderer,
    attached: bool,
}

impl GoogleRouteRenderer {
    /// Crea el mapa dentro de `container` y un DirectionsRenderer asociado
    pub fn new(container: &web_sys::HtmlElement, center: GeoPoint, zoom: f64) -> Result<Self, ProviderError> {
        if !google_maps_ffi::routes_library_ready() {
            return Err(ProviderError::NotReady);
        }

        let options = js_sys::Object::new();
        set_prop(&options, "center", &to_js(&center)?)?;
        set_prop(&options, "zoom", &JsValue::from_f64(zoom))?;
        set_prop(&options, "disableDefaultUI", &JsValue::TRUE)?;
        set_prop(&options, "gestureHandling", &JsValue::from_str("greedy"))?;
        let map = GoogleMap::new(container, &options);

        let renderer_options = js_sys::Object::new();
        set_prop(&renderer_options, "map", &map)?;
        let renderer = DirectionsRenderer::new(&renderer_options);

        Ok(Self {
            map,
            renderer,
            attached: true,
        })
    }
}

impl RouteRenderer for GoogleRouteRenderer {
    type Payload = JsValue;

    fn set_directions(&mut self, payload: &JsValue, route_index: usize) {
        if !self.attached {
            self.renderer.set_map(&self.map);
            self.attached = true;
        }
        self.renderer.set_directions(payload);
        self.renderer.set_route_index(route_index as u32);
    }

    fn set_route_index(&mut self, route_index: usize) {
        self.renderer.set_route_index(route_index as u32);
    }

    fn detach(&mut self) {
        if self.attached {
            self.renderer.set_map(&JsValue::NULL);
            self.attached = false;
            log::info!("🧹 [ROUTE] Overlay de ruta retirado del mapa");
        }
    }
}

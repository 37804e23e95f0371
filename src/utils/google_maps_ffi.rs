// ============================================================================
// GOOGLE MAPS FFI - Bindings a la API JavaScript de Google Maps
// ============================================================================
// Solo wrappers de tipos/funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const MAPS_SCRIPT_ID: &str = "google-maps-js";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
    pub type AutocompleteService;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps", "places"])]
    pub fn new() -> AutocompleteService;

    #[wasm_bindgen(method, js_name = getPlacePredictions)]
    pub fn get_place_predictions(this: &AutocompleteService, request: &JsValue, callback: &js_sys::Function);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
    pub type AutocompleteSessionToken;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps", "places"])]
    pub fn new() -> AutocompleteSessionToken;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps", "places"])]
    pub type PlacesService;

    /// PlacesService necesita un nodo (o un mapa) aunque no lo pinte
    #[wasm_bindgen(constructor, js_namespace = ["google", "maps", "places"])]
    pub fn new(attr_container: &web_sys::HtmlElement) -> PlacesService;

    #[wasm_bindgen(method, js_name = getDetails)]
    pub fn get_details(this: &PlacesService, request: &JsValue, callback: &js_sys::Function);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    pub type GoogleMap;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Map")]
    pub fn new(container: &web_sys::HtmlElement, options: &JsValue) -> GoogleMap;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type DirectionsService;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new() -> DirectionsService;

    /// Devuelve una Promise<DirectionsResult>
    #[wasm_bindgen(method)]
    pub fn route(this: &DirectionsService, request: &JsValue) -> js_sys::Promise;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type DirectionsRenderer;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(options: &JsValue) -> DirectionsRenderer;

    #[wasm_bindgen(method, js_name = setDirections)]
    pub fn set_directions(this: &DirectionsRenderer, result: &JsValue);

    #[wasm_bindgen(method, js_name = setRouteIndex)]
    pub fn set_route_index(this: &DirectionsRenderer, index: u32);

    /// `null` desengancha el overlay del mapa
    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &DirectionsRenderer, map: &JsValue);
}

/// Helper: lee una ruta de propiedades anidadas (window.google.maps...)
fn lookup(path: &[&str]) -> Option<JsValue> {
    let mut current: JsValue = web_sys::window()?.into();
    for key in path {
        current = js_sys::Reflect::get(&current, &JsValue::from_str(key)).ok()?;
        if current.is_undefined() || current.is_null() {
            return None;
        }
    }
    Some(current)
}

/// ¿Está cargada la librería `places`?
pub fn places_library_ready() -> bool {
    lookup(&["google", "maps", "places", "AutocompleteService"]).is_some()
        && lookup(&["google", "maps", "places", "PlacesService"]).is_some()
}

/// ¿Están cargados Map + DirectionsService/Renderer?
pub fn routes_library_ready() -> bool {
    lookup(&["google", "maps", "Map"]).is_some()
        && lookup(&["google", "maps", "DirectionsService"]).is_some()
        && lookup(&["google", "maps", "DirectionsRenderer"]).is_some()
}

/// Inserta el <script> de Google Maps una sola vez
pub fn load_maps_script(api_key: &str, language: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No hay document"))?;

    if document.get_element_by_id(MAPS_SCRIPT_ID).is_some() {
        return Ok(());
    }

    let script = document
        .create_element("script")?
        .dyn_into::<web_sys::HtmlScriptElement>()?;
    script.set_id(MAPS_SCRIPT_ID);
    script.set_async(true);
    script.set_src(&format!(
        "https://maps.googleapis.com/maps/api/js?key={}&libraries=places&language={}",
        api_key, language
    ));

    document
        .head()
        .ok_or_else(|| JsValue::from_str("No hay <head>"))?
        .append_child(&script)?;

    log::info!("🗺️ [MAPS] Script de Google Maps insertado");
    Ok(())
}

/// Helper: lee `obj[key]` como String
pub fn get_string(obj: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_string())
}

/// Helper: invoca un método sin argumentos que devuelve un número (LatLng.lat())
pub fn call_number_method(obj: &JsValue, method: &str) -> Option<f64> {
    let function = js_sys::Reflect::get(obj, &JsValue::from_str(method))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    function.call0(obj).ok()?.as_f64()
}

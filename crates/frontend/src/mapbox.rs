//! Bindings to the subset of Mapbox GL JS the page uses.
//!
//! The library is loaded from the Mapbox CDN (see `Dioxus.toml`) and lives
//! on the global `mapboxgl` namespace.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Map;

    /// Throws when the library is missing or WebGL is unavailable.
    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Map", catch)]
    pub fn new(options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method)]
    pub fn once(this: &Map, event: &str, listener: &Closure<dyn FnMut()>);

    #[wasm_bindgen(method, js_name = on)]
    pub fn on_layer(
        this: &Map,
        event: &str,
        layer_id: &str,
        listener: &Closure<dyn FnMut(JsValue)>,
    );

    /// `undefined` when no source has this id.
    #[wasm_bindgen(method, js_name = getSource)]
    pub fn get_source(this: &Map, id: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = addSource, catch)]
    pub fn add_source(this: &Map, id: &str, source: &JsValue) -> Result<(), JsValue>;

    /// `undefined` when no layer has this id.
    #[wasm_bindgen(method, js_name = getLayer)]
    pub fn get_layer(this: &Map, id: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = addLayer, catch)]
    pub fn add_layer(this: &Map, layer: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, js_name = getCanvas)]
    pub fn get_canvas(this: &Map) -> web_sys::HtmlCanvasElement;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl, js_class = "Marker")]
    pub fn new(options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    pub fn set_lng_lat(this: &Marker, lng_lat: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, map: &Map) -> Marker;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Marker);
}

/// Convert a serde payload into a plain JS object.
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&json)
}

/// Best-effort text for a thrown JS value.
pub fn describe(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    format!("{:?}", err)
}

/// `undefined`/`null` as returned by `getSource`/`getLayer` for unknown ids.
pub fn is_absent(value: &JsValue) -> bool {
    value.is_undefined() || value.is_null()
}

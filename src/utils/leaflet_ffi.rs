// ============================================================================
// LEAFLET FFI - Bindings to the global `L` namespace
// ============================================================================
// Thin wrappers only: no state, no logic
// ============================================================================

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    /// `L.Map` instance
    pub type LeafletMap;

    /// Any `L.Layer` (tiles, polylines, markers)
    pub type LeafletLayer;

    #[wasm_bindgen(js_namespace = L, js_name = map, catch)]
    pub fn create_map(container: &HtmlElement) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = removeLayer)]
    pub fn remove_layer(this: &LeafletMap, layer: &LeafletLayer) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &LeafletMap) -> LeafletMap;

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap);

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> LeafletLayer;

    #[wasm_bindgen(js_namespace = L, catch)]
    pub fn polyline(latlngs: &JsValue, options: &JsValue) -> Result<LeafletLayer, JsValue>;

    #[wasm_bindgen(js_namespace = L, catch)]
    pub fn marker(latlng: &JsValue) -> Result<LeafletLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &LeafletLayer, map: &LeafletMap) -> LeafletLayer;

    #[wasm_bindgen(method, js_name = bindTooltip)]
    pub fn bind_tooltip(this: &LeafletLayer, content: &str) -> LeafletLayer;
}

/// True when leaflet.js has been loaded by index.html
pub fn leaflet_loaded() -> bool {
    web_sys::window()
        .and_then(|win| js_sys::Reflect::get(&win, &JsValue::from_str("L")).ok())
        .map(|l| !l.is_undefined() && !l.is_null())
        .unwrap_or(false)
}

/// Serialize into a plain JS object (not a `Map`), as Leaflet option bags require
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, String> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| format!("Serialization error: {}", e))
}

pub fn describe_js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

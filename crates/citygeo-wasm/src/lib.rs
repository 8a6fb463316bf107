//! citygeo-wasm — WebAssembly bindings for citygeo-core
//!
//! Exposes the estimator to browser renderers so a page can size circles
//! for its own points, or convert a raw Overpass response client-side.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { haversine_km, cities_from_overpass } from 'citygeo-wasm';
//!
//! async function main() {
//!   await init();
//!   console.log(haversine_km(30.04, 31.24, 24.71, 46.68));
//!   const resp = await fetch(overpassUrl).then(r => r.text());
//!   for (const city of cities_from_overpass(resp)) {
//!     L.circle([city.center.latitude, city.center.longitude],
//!              { radius: city.estimated_radius_km * 1000 }).addTo(map);
//!   }
//! }
//! main();
//! ```
use wasm_bindgen::prelude::*;

use citygeo_core::prelude::*;
use serde_wasm_bindgen::to_value;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"citygeo WASM module ready".into());
}

/* --------------------------------------------------------------------------
   Estimator
-------------------------------------------------------------------------- */

/// Great-circle distance in km.
#[wasm_bindgen]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_distance(GeoPoint::new(lat1, lon1), GeoPoint::new(lat2, lon2))
}

#[wasm_bindgen]
pub fn population_radius_km(population: f64) -> f64 {
    // JS numbers are f64; negatives and NaN saturate to 0
    population_to_radius(population as u64)
}

/// Population tag to integer; 0 when unreadable. Returned as f64 for JS.
#[wasm_bindgen(js_name = parse_population)]
pub fn parse_population_js(raw: &str) -> f64 {
    parse_population(raw) as f64
}

/// Covering radius of a lat/lon box in km.
#[wasm_bindgen]
pub fn estimate_city_radius_km(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> f64 {
    estimate_radius(&BoundingBox {
        min_lat,
        max_lat,
        min_lon,
        max_lon,
    })
}

/* --------------------------------------------------------------------------
   Conversion
-------------------------------------------------------------------------- */

/// Convert an Overpass `[out:json]` response body into an array of city
/// records.
#[wasm_bindgen]
pub fn cities_from_overpass(json: &str) -> std::result::Result<JsValue, JsValue> {
    let resp: OverpassResponse =
        serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let array = js_sys::Array::new();
    for city in cities_from_response(&resp) {
        let v = to_value(&city).map_err(|e| JsValue::from_str(&e.to_string()))?;
        array.push(&v);
    }
    Ok(array.into())
}

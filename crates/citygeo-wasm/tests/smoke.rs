use wasm_bindgen_test::*;

// Import the wasm functions from this crate
use citygeo_wasm::{
    estimate_city_radius_km, haversine_km, parse_population_js, population_radius_km,
};

#[wasm_bindgen_test]
fn distance_is_exposed() {
    #[cfg(target_arch = "wasm32")]
    citygeo_wasm::start();

    let d = haversine_km(0.0, 0.0, 0.0, 90.0);
    assert!((d - 10007.5).abs() < 1.0, "got {d}");
    assert_eq!(haversine_km(30.0, 31.0, 30.0, 31.0), 0.0);
}

#[wasm_bindgen_test]
fn population_helpers() {
    assert_eq!(parse_population_js("1,234,567"), 1_234_567.0);
    assert_eq!(population_radius_km(50_000.0), 5.0);
    assert_eq!(population_radius_km(-3.0), 2.0);
}

#[wasm_bindgen_test]
fn box_radius() {
    assert_eq!(estimate_city_radius_km(10.0, 10.0, 20.0, 20.0), 0.0);
    assert!(estimate_city_radius_km(29.9, 30.1, 30.9, 31.1) > 0.0);
}

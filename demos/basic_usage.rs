//! Basic usage example for citygeo-rs
//!
//! This example demonstrates how to:
//! - Estimate city extents from a point and a population tag
//! - Convert an Overpass response into city records
//! - Collect, save and search a dataset
//! - Render the map

use citygeo_rs::prelude::*;

const SAMPLE: &str = r#"{"elements":[
  {"type":"node","lat":31.9539,"lon":35.9106,"tags":{"name":"عمّان","name:en":"Amman","population":"4,007,526"}},
  {"type":"node","lat":32.5556,"lon":35.8500,"tags":{"name":"Irbid","population":"502714"}},
  {"type":"way","tags":{"name":"Zarqa"},"geometry":[
    {"lat":32.03,"lon":36.05},{"lat":32.10,"lon":36.13},{"lat":32.06,"lon":36.16}]}
]}"#;

fn main() -> Result<()> {
    println!("=== citygeo-rs Basic Usage Example ===\n");

    // Example 1: The estimator on its own
    println!("--- Example 1: Point city estimate ---");
    let center = GeoPoint::new(30.0, 31.0);
    let population = parse_population("50000");
    let radius = population_to_radius(population);
    let bbox = approximate_bbox(center, radius);
    println!("Population: {population}, nominal radius: {radius} km");
    println!(
        "Box: lat {:.4}..{:.4}, lon {:.4}..{:.4}",
        bbox.min_lat, bbox.max_lat, bbox.min_lon, bbox.max_lon
    );
    println!("Covering radius: {:.2} km\n", estimate_radius(&bbox));

    // Example 2: Overpass response -> records
    println!("--- Example 2: Convert an Overpass response ---");
    let resp: OverpassResponse = serde_json::from_str(SAMPLE)?;
    let mut collector = CityCollector::new();
    collector.add_response("JO", &resp);
    let dataset = collector.finish();
    for (city, country) in dataset.cities() {
        println!(
            "{} ({country}): pop {}, radius {:.2} km",
            city.name(),
            city.population,
            city.estimated_radius_km
        );
    }
    println!();

    // Example 3: Search
    println!("--- Example 3: Search ---");
    if let Some(((city, _), d)) = dataset.nearest_city(GeoPoint::new(32.0, 36.0)) {
        println!("Nearest to (32.0, 36.0): {} at {d:.1} km", city.name());
    }
    for ((city, _), d) in dataset.cities_within(GeoPoint::new(31.95, 35.91), 30.0) {
        println!("Within 30 km of Amman: {} ({d:.1} km)", city.name());
    }
    println!();

    // Example 4: Persist and render
    println!("--- Example 4: Save and render ---");
    let out = std::env::temp_dir().join("citygeo_demo.json");
    dataset.save_json(&out)?;
    println!("Saved to {}", out.display());
    let html = render_map(&dataset, &MapOptions::default())?;
    println!("Rendered map: {} bytes", html.len());

    Ok(())
}

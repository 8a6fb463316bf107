//! Error handling example for citygeo-rs
//!
//! This example demonstrates proper error handling and edge cases

use citygeo_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== citygeo-rs Error Handling Example ===\n");

    // Example 1: Loading a dataset that does not exist
    println!("--- Example 1: Missing dataset ---");
    match CityDataset::load_json("does/not/exist.json") {
        Ok(ds) => println!("✓ Loaded {} cities", ds.city_count()),
        Err(e) => println!("✗ Failed to load dataset: {e}"),
    }
    match CityDataset::load_default() {
        Ok(ds) => println!("✓ Bundled dataset: {} cities", ds.city_count()),
        Err(e) => println!("✗ No bundled dataset: {e}"),
    }
    println!();

    // Example 2: Population tags that can't be read
    println!("--- Example 2: Unreadable population tags ---");
    for raw in ["1,234,567", "12,5", "1.234", "", "unknown", "1.2.3"] {
        match parse_population_checked(raw) {
            Ok(n) => println!("  {raw:?} -> {n}"),
            Err(e) => println!(
                "  {raw:?} -> {e} (parse_population gives {})",
                parse_population(raw)
            ),
        }
    }
    println!();

    // Example 3: Outlines without vertices are skipped, not fatal
    println!("--- Example 3: Empty geometry ---");
    let resp: OverpassResponse = serde_json::from_str(
        r#"{"elements":[{"type":"relation","members":[],"tags":{"name":"Ghost"}}]}"#,
    )?;
    println!("  Records: {}", cities_from_response(&resp).len());

    Ok(())
}

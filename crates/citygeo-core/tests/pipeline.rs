use citygeo_core::prelude::*;
use citygeo_core::loader::common_io::get_cache_path;
use citygeo_core::loader::CACHE_SUFFIX;
use serde_json::Value;
use tempfile::TempDir;

const BAHRAIN: &str = r#"{
  "version": 0.6,
  "elements": [
    {"type": "node", "id": 1, "lat": 26.2235, "lon": 50.5876,
     "tags": {"place": "city", "name": "المنامة", "name:en": "Manama", "population": "157474"}},
    {"type": "way", "id": 2,
     "geometry": [{"lat": 26.10, "lon": 50.54}, {"lat": 26.14, "lon": 50.58}, {"lat": 26.12, "lon": 50.60}],
     "tags": {"place": "city", "name": "Riffa", "population": "ca 120000"}},
    {"type": "relation", "id": 3,
     "members": [
       {"type": "way", "ref": 10, "role": "outer",
        "geometry": [{"lat": 26.25, "lon": 50.60}, {"lat": 26.27, "lon": 50.64}]},
       {"type": "way", "ref": 11, "role": "outer",
        "geometry": [{"lat": 26.24, "lon": 50.63}]}
     ],
     "tags": {"place": "city", "name": "Muharraq", "population": "n/a"}}
  ]
}"#;

fn collected() -> CityDataset {
    let resp: OverpassResponse = serde_json::from_str(BAHRAIN).unwrap();
    let mut collector = CityCollector::new();
    collector.add_response("BH", &resp);
    collector.add_country("QA", Vec::new());
    collector.finish()
}

#[test]
fn response_becomes_records() {
    let ds = collected();
    let bh = ds.find_country("bh").unwrap();
    let names: Vec<_> = bh.cities.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Manama", "Riffa", "Muharraq"]);

    let populations: Vec<_> = bh.cities.iter().map(|c| c.population).collect();
    assert_eq!(populations, [157_474, 120_000, 0]);

    let muharraq = &bh.cities[2];
    assert_eq!(muharraq.bounding_box.min_lat, 26.24);
    assert_eq!(muharraq.bounding_box.max_lon, 50.64);
    assert!(muharraq.population().is_none());

    let stats = ds.stats();
    assert_eq!(stats.countries, 2);
    assert_eq!(stats.cities, 3);
    assert_eq!(stats.with_population, 2);
}

#[test]
fn saved_json_has_contract_field_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cities.json");
    collected().save_json(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("المنامة") || text.contains("Manama"));
    let v: Value = serde_json::from_str(&text).unwrap();

    let keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys.len(), 2);

    let manama = &v["BH"][0];
    assert_eq!(manama["name"], "Manama");
    assert_eq!(manama["population"], 157474);
    assert!(manama["center"]["latitude"].is_f64());
    assert!(manama["center"]["longitude"].is_f64());
    for k in ["min_lat", "max_lat", "min_lon", "max_lon"] {
        assert!(manama["bounding_box"][k].is_f64(), "missing {k}");
    }
    assert!(manama["estimated_radius_km"].as_f64().unwrap() > 0.0);
    assert_eq!(v["QA"], Value::Array(vec![]));
}

#[test]
fn json_and_gzip_reload() {
    let dir = TempDir::new().unwrap();
    let ds = collected();

    let plain = dir.path().join("cities.json");
    ds.save_json(&plain).unwrap();
    assert_eq!(CityDataset::load_json(&plain).unwrap(), ds);

    let gz = dir.path().join("cities.json.gz");
    ds.save_json(&gz).unwrap();
    let bytes = std::fs::read(&gz).unwrap();
    assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
    assert_eq!(CityDataset::load_json(&gz).unwrap(), ds);
}

#[test]
fn cached_load_writes_and_reuses_binary() {
    let dir = TempDir::new().unwrap();
    let json = dir.path().join("cities.json");
    let ds = collected();
    ds.save_json(&json).unwrap();

    let first = CityDataset::load_cached(&json).unwrap();
    let cache = get_cache_path(&json, CACHE_SUFFIX);
    assert!(cache.exists());
    assert_eq!(first, ds);

    // The cache alone is enough once the source is gone.
    std::fs::remove_file(&json).unwrap();
    let second = CityDataset::load_cached(&json).unwrap();
    assert_eq!(second, ds);
}

#[test]
fn binary_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cities.bin");
    let ds = collected();
    ds.save_binary(&path).unwrap();
    assert_eq!(CityDataset::load_binary(&path).unwrap(), ds);
}

#[test]
fn map_is_written() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("map.html");
    write_map(&collected(), &MapOptions::default(), &path).unwrap();

    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("L.markerClusterGroup()"));
    assert_eq!(html.matches("\"popup\":").count(), 3);
}

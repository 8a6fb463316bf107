// crates/citygeo-core/src/render.rs

//! Standalone Leaflet map of a [`CityDataset`].
//!
//! Each city gets a small red marker (clustered) at its center and a blue
//! outline circle with its estimated radius. The page loads Leaflet and
//! Leaflet.markercluster from a CDN; the data is inlined.

use crate::error::Result;
use crate::geo::GeoPoint;
use crate::model::{CityDataset, CityRecord};
use crate::text::escape_html;
use crate::traits::CitySearch;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// JSON view of one city as consumed by the page script.
#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub name: String,
    pub country: String,
    pub population: u64,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: f64,
    pub radius_m: f64,
    /// Pre-escaped HTML.
    pub popup: String,
}

impl MapMarker {
    pub fn from_city(city: &CityRecord, country: &str) -> Self {
        let name = escape_html(&city.name);
        let popup = format!(
            "<strong>{name}</strong><br>Population: {}<br>Estimated Radius: {:.2} km",
            city.population, city.estimated_radius_km
        );
        Self {
            name: city.name.clone(),
            country: country.to_owned(),
            population: city.population,
            latitude: city.center.latitude,
            longitude: city.center.longitude,
            radius_km: city.estimated_radius_km,
            radius_m: city.estimated_radius_km * 1000.0,
            popup,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MapOptions {
    pub center: GeoPoint,
    pub zoom: u8,
    pub title: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(29.2985, 42.5510),
            zoom: 5,
            title: "Cities".to_string(),
        }
    }
}

pub fn markers(dataset: &CityDataset) -> Vec<MapMarker> {
    dataset
        .cities()
        .map(|(city, country)| MapMarker::from_city(city, country))
        .collect()
}

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{TITLE}}</title>
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
<link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.css">
<link rel="stylesheet" href="https://unpkg.com/leaflet.markercluster@1.5.3/dist/MarkerCluster.Default.css">
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script src="https://unpkg.com/leaflet.markercluster@1.5.3/dist/leaflet.markercluster.js"></script>
<style>html, body, #map { height: 100%; margin: 0; }</style>
</head>
<body>
<div id="map"></div>
<script>
const cities = {{DATA}};
const map = L.map("map").setView([{{LAT}}, {{LON}}], {{ZOOM}});
L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
  attribution: "&copy; OpenStreetMap contributors"
}).addTo(map);
const cluster = L.markerClusterGroup().addTo(map);
for (const c of cities) {
  L.circleMarker([c.latitude, c.longitude], {
    radius: 5, color: "red", fill: true, fillColor: "red"
  }).bindPopup(c.popup).addTo(cluster);
  L.circle([c.latitude, c.longitude], {
    radius: c.radius_m, color: "blue", fill: false
  }).bindPopup(c.name.replace(/[&<>"']/g, ch => "&#" + ch.charCodeAt(0) + ";") + " estimated area").addTo(map);
}
</script>
</body>
</html>
"##;

/// Render the dataset to a self-contained HTML page.
pub fn render_map(dataset: &CityDataset, options: &MapOptions) -> Result<String> {
    // `</` inside an inline script would close it early.
    let data = serde_json::to_string(&markers(dataset))?.replace("</", "<\\/");

    Ok(TEMPLATE
        .replace("{{TITLE}}", &escape_html(&options.title))
        .replace("{{LAT}}", &options.center.latitude.to_string())
        .replace("{{LON}}", &options.center.longitude.to_string())
        .replace("{{ZOOM}}", &options.zoom.to_string())
        .replace("{{DATA}}", &data))
}

/// Render and write the page to `path`.
pub fn write_map(
    dataset: &CityDataset,
    options: &MapOptions,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let html = render_map(dataset, options)?;
    fs::write(path, html)?;
    info!(path = %path.display(), cities = dataset.city_count(), "map written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::CityCollector;
    use crate::convert::city_from_geometry;
    use crate::model::PlaceGeometry;

    fn dataset(name: &str) -> CityDataset {
        let city = city_from_geometry(
            name,
            1_250_000,
            &PlaceGeometry::Point(GeoPoint::new(24.47, 54.37)),
        )
        .unwrap();
        let mut col = CityCollector::new();
        col.add_country("AE", vec![city]);
        col.finish()
    }

    #[test]
    fn popup_matches_expected_text() {
        let ds = dataset("Abu Dhabi");
        let m = &markers(&ds)[0];
        assert!(m.popup.starts_with(
            "<strong>Abu Dhabi</strong><br>Population: 1250000<br>Estimated Radius: "
        ));
        assert!(m.popup.ends_with(" km"));
        assert_eq!(m.radius_m, m.radius_km * 1000.0);
        assert_eq!(m.country, "AE");
    }

    #[test]
    fn page_contains_view_and_data() {
        let html = render_map(&dataset("Abu Dhabi"), &MapOptions::default()).unwrap();
        assert!(html.contains("setView([29.2985, 42.551], 5)"));
        assert!(html.contains("\"name\":\"Abu Dhabi\""));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn names_cannot_break_out_of_script() {
        let html = render_map(&dataset("</script><b>x"), &MapOptions::default()).unwrap();
        assert_eq!(html.matches("</script>").count(), 3);
        assert!(html.contains("&lt;/script&gt;&lt;b&gt;x"));
    }
}

// crates/citygeo-core/src/convert.rs

//! **Raw -> Domain:** turns Overpass elements into [`CityRecord`]s.

use crate::geo::{
    approximate_bbox, estimate_radius, population_to_radius, BoundingBox, GeoPoint,
    DEFAULT_RADIUS_KM,
};
use crate::model::{CityRecord, PlaceGeometry};
use crate::population::parse_population;
use crate::raw::{ElementRaw, OverpassResponse};
use tracing::{debug, warn};

/// Name used when an element carries neither `name:en` nor `name`.
pub const UNKNOWN_NAME: &str = "Unknown";

impl ElementRaw {
    /// Typed geometry of the element. `None` for element kinds we don't map.
    pub fn geometry(&self) -> Option<PlaceGeometry> {
        match self {
            ElementRaw::Node { lat, lon, .. } => {
                Some(PlaceGeometry::Point(GeoPoint::new(*lat, *lon)))
            }
            ElementRaw::Way { geometry, .. } => Some(PlaceGeometry::Way(
                geometry.iter().copied().map(GeoPoint::from).collect(),
            )),
            ElementRaw::Relation { members, .. } => Some(PlaceGeometry::Relation(
                members
                    .iter()
                    .filter_map(|m| m.geometry.as_ref())
                    .map(|g| g.iter().copied().map(GeoPoint::from).collect())
                    .collect(),
            )),
            ElementRaw::Other => None,
        }
    }

    /// English name, falling back to the local name, then [`UNKNOWN_NAME`].
    pub fn display_name(&self) -> &str {
        self.tag("name:en")
            .or_else(|| self.tag("name"))
            .unwrap_or(UNKNOWN_NAME)
    }

    /// Parsed `population` tag, 0 when absent or unreadable.
    pub fn population(&self) -> u64 {
        self.tag("population").map(parse_population).unwrap_or(0)
    }
}

/// Bounding box for a place.
///
/// Points get a box from [`population_to_radius`], or [`DEFAULT_RADIUS_KM`]
/// when the population is unknown. Outlines use their vertex extent.
pub fn place_bbox(geometry: &PlaceGeometry, population: u64) -> Option<BoundingBox> {
    match geometry {
        PlaceGeometry::Point(p) => {
            let radius = if population > 0 {
                population_to_radius(population)
            } else {
                DEFAULT_RADIUS_KM
            };
            Some(approximate_bbox(*p, radius))
        }
        outline => outline.outline_bbox(),
    }
}

/// Build a record from a name, population and geometry.
pub fn city_from_geometry(
    name: impl Into<String>,
    population: u64,
    geometry: &PlaceGeometry,
) -> Option<CityRecord> {
    let bounding_box = place_bbox(geometry, population)?;
    Some(CityRecord {
        name: name.into(),
        population,
        center: bounding_box.center(),
        estimated_radius_km: estimate_radius(&bounding_box),
        bounding_box,
    })
}

/// Convert one element. Skips (with a warning) outlines without vertices.
pub fn city_from_element(element: &ElementRaw) -> Option<CityRecord> {
    let Some(geometry) = element.geometry() else {
        debug!(id = ?element.id(), "skipping unsupported element type");
        return None;
    };

    let name = element.display_name();
    let record = city_from_geometry(name, element.population(), &geometry);
    if record.is_none() {
        warn!(id = ?element.id(), city = name, "element has no geometry vertices, skipping");
    }
    record
}

/// Convert a whole response, preserving element order.
pub fn cities_from_response(response: &OverpassResponse) -> Vec<CityRecord> {
    response
        .elements
        .iter()
        .filter_map(city_from_element)
        .collect()
}

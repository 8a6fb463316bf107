// crates/citygeo-core/src/raw.rs

//! Raw Overpass payload as it comes off the wire (`[out:json]` + `out geom`).
//!
//! NOTE: these types mirror the external API. They are kept separate from the
//! domain model so a schema change upstream only touches this file.

use crate::geo::GeoPoint;
use serde::Deserialize;
use std::collections::HashMap;

/// Top-level interpreter response.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<ElementRaw>,
}

/// A vertex inside a way's or relation member's `geometry` array.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLonRaw {
    pub lat: f64,
    pub lon: f64,
}

impl From<LatLonRaw> for GeoPoint {
    fn from(v: LatLonRaw) -> Self {
        GeoPoint::new(v.lat, v.lon)
    }
}

/// Relation member. Only way members carry `geometry`; node members carry
/// their own `lat`/`lon` and are ignored for the outline.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberRaw {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub geometry: Option<Vec<LatLonRaw>>,
}

/// One element of the response, discriminated by its `"type"` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementRaw {
    Node {
        #[serde(default)]
        id: Option<i64>,
        lat: f64,
        lon: f64,
        #[serde(default)]
        tags: HashMap<String, String>,
    },
    Way {
        #[serde(default)]
        id: Option<i64>,
        #[serde(default)]
        geometry: Vec<LatLonRaw>,
        #[serde(default)]
        tags: HashMap<String, String>,
    },
    Relation {
        #[serde(default)]
        id: Option<i64>,
        #[serde(default)]
        members: Vec<MemberRaw>,
        #[serde(default)]
        tags: HashMap<String, String>,
    },
    /// Anything else the interpreter may emit (`area`, `count`, ...).
    #[serde(other)]
    Other,
}

impl ElementRaw {
    pub fn id(&self) -> Option<i64> {
        match self {
            ElementRaw::Node { id, .. }
            | ElementRaw::Way { id, .. }
            | ElementRaw::Relation { id, .. } => *id,
            ElementRaw::Other => None,
        }
    }

    pub fn tags(&self) -> Option<&HashMap<String, String>> {
        match self {
            ElementRaw::Node { tags, .. }
            | ElementRaw::Way { tags, .. }
            | ElementRaw::Relation { tags, .. } => Some(tags),
            ElementRaw::Other => None,
        }
    }

    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags().and_then(|t| t.get(key)).map(String::as_str)
    }
}

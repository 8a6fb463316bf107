// crates/citygeo-core/src/lib.rs

//! # citygeo-core
//!
//! City extents from OpenStreetMap `place=city` data.
//!
//! - [`geo`]: haversine distance, covering radius, radius/box estimation
//! - [`population`]: cleaning of free-text population tags
//! - [`raw`] + [`convert`]: Overpass elements -> [`CityRecord`]
//! - [`collector`] + [`loader`]: per-country accumulation and persistence
//! - [`search`]: lookups over a [`CityDataset`]
//! - [`render`]: standalone Leaflet map
//! - `fetch` (feature `fetch`): blocking Overpass client
//!
//! ```rust
//! use citygeo_core::prelude::*;
//!
//! let center = GeoPoint::new(30.0, 31.0);
//! let radius = population_to_radius(parse_population("50000"));
//! let bbox = approximate_bbox(center, radius);
//! assert!(estimate_radius(&bbox) >= radius);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod collector;
pub mod common;
pub mod convert;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod geo;
pub mod loader;
pub mod model;
pub mod population;
pub mod prelude;
pub mod raw;
pub mod render;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::collector::CityCollector;
pub use crate::common::DatasetStats;
pub use crate::error::{GeoError, Result};
pub use crate::geo::{
    approximate_bbox, estimate_radius, haversine_distance, population_to_radius, BoundingBox,
    GeoPoint,
};
pub use crate::model::{CityDataset, CityRecord, CountryCities, PlaceGeometry};
pub use crate::population::parse_population;
pub use crate::traits::CitySearch;

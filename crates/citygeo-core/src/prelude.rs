//! citygeo prelude: bring common types and traits into scope.

#![allow(unused_imports)]

pub use crate::collector::CityCollector;
pub use crate::common::DatasetStats;
pub use crate::convert::{cities_from_response, city_from_element, city_from_geometry};
pub use crate::error::{GeoError, Result};
#[cfg(feature = "fetch")]
pub use crate::fetch::{FetchConfig, OverpassClient, MIDDLE_EAST_COUNTRIES};
pub use crate::geo::{
    approximate_bbox, estimate_radius, haversine_distance, population_to_radius, BoundingBox,
    GeoPoint, DEFAULT_RADIUS_KM, EARTH_RADIUS_KM,
};
pub use crate::model::{CityDataset, CityRecord, CountryCities, PlaceGeometry};
pub use crate::population::{parse_population, parse_population_checked};
pub use crate::raw::{ElementRaw, OverpassResponse};
pub use crate::render::{render_map, write_map, MapOptions};
pub use crate::text::fold_key;
pub use crate::traits::CitySearch;

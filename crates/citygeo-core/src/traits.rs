// crates/citygeo-core/src/traits.rs
use crate::common::DatasetStats;
use crate::geo::GeoPoint;
use crate::model::{CityRecord, CountryCities};

/// A city paired with the country code it was collected under.
pub type CityContext<'a> = (&'a CityRecord, &'a str);

/// An iterator that yields cities with their country code.
pub type CitiesIter<'a> = Box<dyn Iterator<Item = CityContext<'a>> + 'a>;

/// Read-only queries over collected cities.
pub trait CitySearch {
    fn stats(&self) -> DatasetStats;

    /// All countries, in collection order.
    fn countries(&self) -> &[CountryCities];

    /// Every city with its country code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use citygeo_core::prelude::*;
    ///
    /// let ds = CityDataset::load_json("cities.json").unwrap();
    /// for (city, country) in ds.cities().take(5) {
    ///     println!("- {} ({country}): {:.1} km", city.name(), city.estimated_radius_km);
    /// }
    /// ```
    fn cities<'a>(&'a self) -> CitiesIter<'a>;

    /// Country by ISO2 code, case-insensitive.
    fn find_country(&self, code: &str) -> Option<&CountryCities>;

    /// Accent- and case-insensitive substring match on city names.
    /// An empty query matches nothing.
    fn find_cities_by_substring(&self, substr: &str) -> Vec<CityContext<'_>>;

    /// Cities whose center lies within `radius_km` of `point`, nearest first,
    /// paired with their distance in km.
    fn cities_within(&self, point: GeoPoint, radius_km: f64) -> Vec<(CityContext<'_>, f64)>;

    /// Closest city center to `point`.
    fn nearest_city(&self, point: GeoPoint) -> Option<(CityContext<'_>, f64)>;
}

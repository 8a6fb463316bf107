// crates/citygeo-core/src/collector.rs
use crate::convert::cities_from_response;
use crate::model::{CityDataset, CityRecord, CountryCities};
use crate::raw::OverpassResponse;
use tracing::info;

/// Accumulates per-country results across fetches.
///
/// Passed explicitly between calls instead of living in a global; call
/// [`CityCollector::finish`] once to obtain the dataset to persist.
#[derive(Debug, Default)]
pub struct CityCollector {
    countries: Vec<CountryCities>,
}

impl CityCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the cities for `country_code`.
    ///
    /// Re-adding a country replaces its cities but keeps its original
    /// position in the output.
    pub fn add_country(&mut self, country_code: impl Into<String>, cities: Vec<CityRecord>) {
        let country_code = country_code.into();
        match self
            .countries
            .iter_mut()
            .find(|c| c.country_code == country_code)
        {
            Some(existing) => existing.cities = cities,
            None => self.countries.push(CountryCities {
                country_code,
                cities,
            }),
        }
    }

    /// Convert a raw response and store it. Returns the number of cities kept.
    pub fn add_response(&mut self, country_code: &str, response: &OverpassResponse) -> usize {
        let cities = cities_from_response(response);
        let n = cities.len();
        info!(country = country_code, cities = n, "collected cities");
        self.add_country(country_code, cities);
        n
    }

    /// Number of countries collected so far.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn city_count(&self) -> usize {
        self.countries.iter().map(|c| c.cities.len()).sum()
    }

    pub fn finish(self) -> CityDataset {
        CityDataset::new(self.countries)
    }
}

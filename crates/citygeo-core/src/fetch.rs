// crates/citygeo-core/src/fetch.rs
#![cfg(feature = "fetch")]

//! Blocking client for the Overpass interpreter.

use crate::collector::CityCollector;
use crate::error::{GeoError, Result};
use crate::raw::OverpassResponse;
use std::time::Duration;
use tracing::{error, info};

impl From<reqwest::Error> for GeoError {
    fn from(e: reqwest::Error) -> Self {
        GeoError::Http(e.to_string())
    }
}

pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";

/// ISO 3166-1 alpha-2 codes queried when no list is given.
pub const MIDDLE_EAST_COUNTRIES: &[&str] = &[
    "DZ", "BH", "KM", "EG", "IQ", "JO", "KW", "LB", "LY", "MR", "MA", "OM", "PS", "QA", "SA",
    "SO", "SD", "SY", "TN", "AE", "YE",
];

/// Overpass QL selecting every `place=city` node, way and relation inside a
/// country, with full geometry.
pub fn overpass_query(country_code: &str) -> String {
    format!(
        r#"[out:json];
area["ISO3166-1"="{country_code}"]->.searchArea;
(
  node["place"="city"](area.searchArea);
  way["place"="city"](area.searchArea);
  relation["place"="city"](area.searchArea);
);
out geom;"#
    )
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(180),
            user_agent: concat!("citygeo/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

pub struct OverpassClient {
    http: reqwest::blocking::Client,
    config: FetchConfig,
}

impl OverpassClient {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Run the city query for one country.
    pub fn fetch_country(&self, country_code: &str) -> Result<OverpassResponse> {
        let query = overpass_query(country_code);
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[("data", query.as_str())])
            .send()?
            .error_for_status()?;

        let body = response.bytes()?;
        serde_json::from_slice(&body).map_err(|e| {
            GeoError::InvalidData(format!("Overpass response for {country_code}: {e}"))
        })
    }

    /// Fetch `country_codes` one after another into `collector`.
    ///
    /// A failing country is logged and left out; the run continues.
    /// Returns the number of countries that failed.
    pub fn collect(&self, country_codes: &[&str], collector: &mut CityCollector) -> usize {
        let mut failed = 0;
        for code in country_codes {
            info!(country = code, "fetching cities");
            match self.fetch_country(code) {
                Ok(resp) => {
                    collector.add_response(code, &resp);
                }
                Err(e) => {
                    error!(country = code, error = %e, "fetch failed");
                    failed += 1;
                }
            }
        }
        failed
    }
}

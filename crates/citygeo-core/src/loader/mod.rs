// crates/citygeo-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, gzip) for [`CityDataset`] and delegates
//! the payload to serde: pretty JSON for the exchange file, bincode for the
//! local cache.

use crate::error::Result;
use crate::model::CityDataset;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::debug;

mod cache;
pub mod common_io;

pub use cache::CACHE_SUFFIX;

static DATASET_CACHE: OnceCell<CityDataset> = OnceCell::new();

impl CityDataset {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "cities.json"
    }

    /// Load `data/cities.json` under the crate root once per process.
    ///
    /// Goes through [`CityDataset::load_cached`], so a fresh binary cache is
    /// preferred when present.
    pub fn load_default() -> Result<Self> {
        DATASET_CACHE
            .get_or_try_init(|| {
                let path = Self::default_data_dir().join(Self::default_dataset_filename());
                Self::load_cached(path)
            })
            .cloned()
    }

    /// Parse a dataset file (`.json` or `.json.gz`).
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let ds: CityDataset = serde_json::from_reader(reader)?;
        debug!(path = %path.display(), countries = ds.country_count(), "loaded dataset");
        Ok(ds)
    }

    /// Write the dataset as pretty-printed UTF-8 JSON, gzip for `*.gz` paths.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = common_io::create_stream(path)?;
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.finish()?;
        debug!(path = %path.display(), cities = self.city_count(), "saved dataset");
        Ok(())
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let err = CityDataset::load_json("/definitely/not/here/cities.json").unwrap_err();
        assert!(matches!(err, crate::error::GeoError::NotFound(_)));
    }

    #[test]
    fn json_string_round_trip_keeps_non_ascii() {
        let ds = CityDataset::from_json_str(r#"{"EG":[{"name":"القاهرة","population":0,
            "center":{"latitude":30.0,"longitude":31.0},
            "bounding_box":{"min_lat":29.9,"max_lat":30.1,"min_lon":30.9,"max_lon":31.1},
            "estimated_radius_km":14.0}]}"#)
        .unwrap();
        let text = ds.to_json_string().unwrap();
        assert!(text.contains("القاهرة"));
        assert_eq!(CityDataset::from_json_str(&text).unwrap(), ds);
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = CityDataset::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, crate::error::GeoError::Json(_)));
    }
}

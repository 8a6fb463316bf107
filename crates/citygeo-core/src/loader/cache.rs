// crates/citygeo-core/src/loader/cache.rs
use super::common_io;
use crate::error::Result;
use crate::model::CityDataset;
use bincode::Options;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Extension appended to a JSON path for its binary cache.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "bin.gz";

// Guard against corrupt or hostile cache files.
const MAX_CACHE_BYTES: u64 = 256 * 1024 * 1024;

impl CityDataset {
    /// Write the dataset with bincode (gzip for `*.gz` paths).
    pub fn save_binary(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = common_io::create_stream(path.as_ref())?;
        bincode::serialize_into(&mut writer, self)?;
        writer.finish()?;
        Ok(())
    }

    /// Read a dataset written by [`CityDataset::save_binary`].
    pub fn load_binary(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = common_io::open_stream(path.as_ref())?;
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::from_bytes(&data)?)
    }

    pub fn from_bytes(data: &[u8]) -> std::result::Result<Self, bincode::Error> {
        bincode::DefaultOptions::new()
            .with_fixint_encoding()
            .with_limit(MAX_CACHE_BYTES)
            .allow_trailing_bytes()
            .deserialize(data)
    }

    /// **Smart Load:** prefers a fresh binary cache, else parses the JSON and
    /// refreshes the cache.
    ///
    /// Cache writes are best-effort; a read-only data dir still loads.
    pub fn load_cached(json_path: impl AsRef<Path>) -> Result<Self> {
        let json_path = json_path.as_ref();
        let cache_path = common_io::get_cache_path(json_path, CACHE_SUFFIX);

        if is_cache_fresh(json_path, &cache_path) {
            match Self::load_binary(&cache_path) {
                Ok(ds) => {
                    debug!(path = %cache_path.display(), "using binary cache");
                    return Ok(ds);
                }
                Err(e) => {
                    warn!(path = %cache_path.display(), error = %e, "ignoring unreadable cache")
                }
            }
        }

        let ds = Self::load_json(json_path)?;
        if let Err(e) = ds.save_binary(&cache_path) {
            debug!(path = %cache_path.display(), error = %e, "could not write cache");
        }
        Ok(ds)
    }
}

fn is_cache_fresh(json_path: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(json_path).and_then(|m| m.modified()) {
        Ok(json_time) => json_time < cache_time,
        // Source gone: the cache is all we have.
        Err(_) => true,
    }
}

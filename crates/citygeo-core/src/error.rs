// crates/citygeo-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading, fetching or writing city data.
///
/// The estimator itself never fails; population parse failures are
/// recovered in [`crate::population`] and do not surface here.
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary cache error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("HTTP error: {0}")]
    Http(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;

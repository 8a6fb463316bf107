/// Simple aggregate statistics for a dataset.
///
/// Returned by [`crate::traits::CitySearch::stats`].
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub countries: usize,
    pub cities: usize,
    /// Cities whose population tag parsed to a non-zero value.
    pub with_population: usize,
}

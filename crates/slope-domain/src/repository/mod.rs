//! Repository trait definitions for data loading

use crate::model::ResultRow;
use slope_types::Error;

/// Source of precomputed slope stability results
pub trait ResultDatasetRepository {
    /// Load every result row in file order
    fn load_all(&self) -> Result<Vec<ResultRow>, Error>;
}

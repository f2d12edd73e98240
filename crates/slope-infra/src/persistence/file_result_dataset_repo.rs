//! File-based implementation of ResultDatasetRepository

use std::path::PathBuf;

use slope_domain::model::ResultRow;
use slope_domain::repository::ResultDatasetRepository;
use slope_types::Error;

use crate::dataset_loader::load_result_dataset;

/// Result dataset stored as a JSON or CSV file
pub struct FileResultDatasetRepository {
    path: PathBuf,
}

impl FileResultDatasetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ResultDatasetRepository for FileResultDatasetRepository {
    fn load_all(&self) -> Result<Vec<ResultRow>, Error> {
        if !self.path.exists() {
            return Err(Error::FileNotFound(self.path.display().to_string()));
        }
        load_result_dataset(&self.path).map_err(Into::into)
    }
}

//! Repository adapters for the data layer

use slope_domain::model::ResultRow;
use slope_domain::repository::ResultDatasetRepository;
use slope_domain::DataSource;
use slope_infra::image_assets::ImageAssetStore;
use slope_infra::persistence::FileResultDatasetRepository;
use slope_types::Result;

use crate::config::Config;

/// Open the file-based result dataset repository
pub fn open_result_repo(config: &Config) -> FileResultDatasetRepository {
    FileResultDatasetRepository::new(config.dataset_path.clone())
}

/// Load every row of the configured dataset
pub fn load_result_rows(config: &Config) -> Result<Vec<ResultRow>> {
    open_result_repo(config).load_all()
}

/// Load the configured dataset; a failure leaves the source unloaded
pub fn open_data_source(config: &Config) -> DataSource {
    DataSource::from_load(load_result_rows(config))
}

/// Open the diagram picture tree
pub fn open_asset_store(config: &Config) -> ImageAssetStore {
    ImageAssetStore::new(config.asset_root.clone())
}

//! Infrastructure layer - dataset loaders, repositories, image assets

pub mod dataset_loader;
pub mod image_assets;
pub mod image_index;
pub mod persistence;

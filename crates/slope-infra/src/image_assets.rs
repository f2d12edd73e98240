//! Diagram image lookup on disk

use std::path::{Path, PathBuf};

use slope_domain::service::image_asset_path;
use slope_types::{CaseCode, GroupCode};

/// Picture tree rooted at a configured directory
#[derive(Debug, Clone)]
pub struct ImageAssetStore {
    root: PathBuf,
}

impl ImageAssetStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, group: GroupCode, case: CaseCode, angle: &str, depth: &str) -> PathBuf {
        image_asset_path(&self.root, group, case, angle, depth)
    }
}

/// Whether a diagram file can be shown
pub fn asset_exists(path: &Path) -> bool {
    path.is_file()
}

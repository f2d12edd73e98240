//! In-memory display state
//!
//! `ViewState` records what a screen would show after an interaction cycle so it
//! can be rendered afterwards as a table or serialized as JSON.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use slope_domain::constants::messages::{
    EMPTY_DISPLACEMENT, EMPTY_FACTOR_OF_SAFETY, ZONE_HEADER_DEFAULT,
};
use slope_domain::service::FormattedSoilParameters;
use slope_types::LayerType;

use crate::presentation::{ImageOutcome, PresentationAdapter};

/// Snapshot of everything on screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupView {
    pub zone_header: String,
    pub params: BTreeMap<LayerType, Option<FormattedSoilParameters>>,
    pub factor_of_safety: String,
    pub displacement: String,
    pub image_path: Option<PathBuf>,
    pub image_shown: bool,
    /// Placeholder or missing-diagram message
    pub message: Option<String>,
    pub dataset_available: bool,
}

impl Default for LookupView {
    fn default() -> Self {
        Self {
            zone_header: ZONE_HEADER_DEFAULT.to_string(),
            params: BTreeMap::new(),
            factor_of_safety: EMPTY_FACTOR_OF_SAFETY.to_string(),
            displacement: EMPTY_DISPLACEMENT.to_string(),
            image_path: None,
            image_shown: false,
            message: None,
            dataset_available: true,
        }
    }
}

/// Presentation adapter that keeps the latest view in memory
pub struct ViewState {
    view: LookupView,
    image_probe: fn(&Path) -> bool,
}

impl ViewState {
    /// `image_probe` decides whether a diagram path can be displayed
    pub fn new(image_probe: fn(&Path) -> bool) -> Self {
        Self {
            view: LookupView::default(),
            image_probe,
        }
    }

    pub fn view(&self) -> &LookupView {
        &self.view
    }

    pub fn into_view(self) -> LookupView {
        self.view
    }
}

impl PresentationAdapter for ViewState {
    fn show_result(&mut self, factor_of_safety: &str, displacement: &str) {
        self.view.factor_of_safety = factor_of_safety.to_string();
        self.view.displacement = displacement.to_string();
    }

    fn show_params(&mut self, layer: LayerType, params: Option<&FormattedSoilParameters>) {
        self.view.params.insert(layer, params.cloned());
    }

    fn show_zone_header(&mut self, header: &str) {
        self.view.zone_header = header.to_string();
    }

    fn show_image(&mut self, path: &Path) -> ImageOutcome {
        self.view.image_path = Some(path.to_path_buf());
        self.view.image_shown = (self.image_probe)(path);
        self.view.message = None;
        if self.view.image_shown {
            ImageOutcome::Shown
        } else {
            ImageOutcome::Failed
        }
    }

    fn show_image_missing(&mut self, message: &str) {
        self.view.image_shown = false;
        self.view.message = Some(message.to_string());
    }

    fn show_placeholder(&mut self, message: &str) {
        self.view.image_path = None;
        self.view.image_shown = false;
        self.view.message = Some(message.to_string());
    }

    fn show_dataset_unavailable(&mut self) {
        self.view.dataset_available = false;
    }
}

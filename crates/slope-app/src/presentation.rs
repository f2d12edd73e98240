//! Presentation contract
//!
//! The lookup service drives a display through this trait; each front end
//! (terminal table, JSON, a GUI) provides its own implementation.

use std::path::Path;

use serde::Serialize;
use slope_domain::service::FormattedSoilParameters;
use slope_types::LayerType;

/// Whether a diagram could be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageOutcome {
    Shown,
    Failed,
}

pub trait PresentationAdapter {
    /// Factor of safety and displacement display strings
    fn show_result(&mut self, factor_of_safety: &str, displacement: &str);

    /// Parameter row for one layer; `None` renders every field as "-"
    fn show_params(&mut self, layer: LayerType, params: Option<&FormattedSoilParameters>);

    fn show_zone_header(&mut self, header: &str);

    /// Try to display the diagram at `path`
    fn show_image(&mut self, path: &Path) -> ImageOutcome;

    /// Diagram could not be displayed
    fn show_image_missing(&mut self, message: &str);

    /// Prompt shown while the selection is incomplete
    fn show_placeholder(&mut self, message: &str);

    /// Dataset is still loading or failed to load
    fn show_dataset_unavailable(&mut self) {}
}

//! Diagram image path convention
//!
//! `<root>/<G>/<G>_<C>_ADDEDFailureline/<G>_<C>_<angle>_<depth>m.png`

use std::path::{Path, PathBuf};

use serde::Serialize;
use slope_types::{CaseCode, GroupCode};

use crate::model::{normalize_angle, strip_depth_unit};

const FAILURE_LINE_FOLDER_SUFFIX: &str = "ADDEDFailureline";

/// Build the diagram path for a selection
pub fn image_asset_path(
    root: &Path,
    group: GroupCode,
    case: CaseCode,
    angle: &str,
    depth: &str,
) -> PathBuf {
    let folder = format!("{}_{}_{}", group, case, FAILURE_LINE_FOLDER_SUFFIX);
    let file = format!(
        "{}_{}_{}_{}m.png",
        group,
        case,
        normalize_angle(angle),
        strip_depth_unit(depth)
    );
    root.join(group.as_str()).join(folder).join(file)
}

/// Fields encoded in a diagram file name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageFileName {
    pub zone: String,
    pub water: CaseCode,
    pub degree: u32,
    /// Depth with unit, e.g. "5m"
    pub depth: String,
}

/// Parse `<zone>_<DRY|RAPID|WET>_<degree>_<depth>m.png`
pub fn parse_image_file_name(name: &str) -> Option<ImageFileName> {
    let stem = name.strip_suffix(".png")?;
    let mut parts = stem.split('_');
    let zone = parts.next()?;
    let water = CaseCode::from_code(parts.next()?)?;
    let degree = parts.next()?;
    let depth = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    if zone.is_empty() || !zone.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    if degree.is_empty() || !degree.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let depth_digits = depth.strip_suffix('m')?;
    if depth_digits.is_empty() || !depth_digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(ImageFileName {
        zone: zone.to_string(),
        water,
        degree: degree.parse().ok()?,
        depth: depth.to_string(),
    })
}

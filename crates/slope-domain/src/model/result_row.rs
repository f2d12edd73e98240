//! Precomputed result row type definitions

use serde::{Deserialize, Serialize};
use slope_types::{CaseCode, GroupCode};

use super::CellValue;

/// One precomputed slope stability result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    #[serde(rename = "GroupCode")]
    pub group: GroupCode,
    /// Excavation depth (m)
    #[serde(rename = "Depth")]
    pub depth_m: f64,
    #[serde(rename = "Case")]
    pub case: CaseCode,
    /// Embankment angle as stored, e.g. "15°"
    #[serde(rename = "Degree")]
    pub degree: String,
    #[serde(rename = "FactorOfSafety", default)]
    pub factor_of_safety: CellValue,
    /// Horizontal displacement (m)
    #[serde(rename = "Displacement", default)]
    pub displacement: CellValue,
}

impl ResultRow {
    pub fn angle(&self) -> String {
        normalize_angle(&self.degree)
    }
}

/// Strip degree symbols and surrounding whitespace from an angle
pub fn normalize_angle(angle: &str) -> String {
    angle.replace('°', "").trim().to_string()
}

/// Depth text without surrounding whitespace or a trailing `m` unit
pub fn strip_depth_unit(depth: &str) -> &str {
    let depth = depth.trim();
    depth.strip_suffix('m').unwrap_or(depth).trim_end()
}

/// Parse a depth given as text ("5", " 5.0 ", "5m") into metres
pub fn canonical_depth(depth: &str) -> Option<f64> {
    strip_depth_unit(depth).parse::<f64>().ok().filter(|d| d.is_finite())
}

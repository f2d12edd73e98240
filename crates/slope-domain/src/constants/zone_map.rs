//! Selector value to join key mapping

use slope_types::{CaseCode, GroupCode, WaterLevel, ZoneCode};

/// Map a raw zone identifier to its dataset group
///
/// `None` means nothing usable is selected yet.
pub fn resolve_group_code(zone: &str) -> Option<GroupCode> {
    ZoneCode::from_label(zone).map(|z| z.group_code())
}

/// Map a water level label (or its ascii key) to its case code
pub fn resolve_case_code(water_level: &str) -> Option<CaseCode> {
    WaterLevel::from_label(water_level).map(|w| w.case_code())
}

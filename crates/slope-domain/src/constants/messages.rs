//! Fixed display strings

/// Shown while any of the four selectors is empty
pub const PLACEHOLDER_MESSAGE: &str = "Please select all 4 inputs";

/// Shown when the diagram for a selection does not exist
pub const IMAGE_MISSING_MESSAGE: &str = "The Structure seems to be Collapse";

/// Zone header before a zone is chosen
pub const ZONE_HEADER_DEFAULT: &str = "ZONE";

/// Factor of safety when nothing matched
pub const EMPTY_FACTOR_OF_SAFETY: &str = "0.000";

/// Displacement when nothing matched
pub const EMPTY_DISPLACEMENT: &str = "0.0 m";

pub fn zone_header(zone: Option<&str>) -> String {
    match zone {
        Some(zone) if !zone.is_empty() => format!("Zone {}", zone),
        _ => ZONE_HEADER_DEFAULT.to_string(),
    }
}

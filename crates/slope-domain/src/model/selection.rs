//! User selection state for one interaction cycle

use serde::{Deserialize, Serialize};

/// The four raw selector values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSelection {
    pub zone: Option<String>,
    pub depth: Option<String>,
    pub angle: Option<String>,
    pub water_level: Option<String>,
}

/// Whether a lookup can be attempted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionState {
    Incomplete,
    Complete,
}

/// Selector a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionField {
    Zone,
    Depth,
    Angle,
    WaterLevel,
}

impl SelectionField {
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "zone" => Some(SelectionField::Zone),
            "depth" => Some(SelectionField::Depth),
            "angle" | "theta" | "degree" => Some(SelectionField::Angle),
            "water" | "water_level" | "water-level" => Some(SelectionField::WaterLevel),
            _ => None,
        }
    }
}

impl UserSelection {
    pub fn new(zone: &str, depth: &str, angle: &str, water_level: &str) -> Self {
        Self {
            zone: Some(zone.to_string()),
            depth: Some(depth.to_string()),
            angle: Some(angle.to_string()),
            water_level: Some(water_level.to_string()),
        }
    }

    /// True iff all four selectors hold a non-empty value
    pub fn is_complete(&self) -> bool {
        [&self.zone, &self.depth, &self.angle, &self.water_level]
            .iter()
            .all(|v| v.as_deref().is_some_and(|s| !s.is_empty()))
    }

    pub fn state(&self) -> SelectionState {
        if self.is_complete() {
            SelectionState::Complete
        } else {
            SelectionState::Incomplete
        }
    }

    /// Set one selector; an empty value clears it
    pub fn set(&mut self, field: SelectionField, value: &str) {
        let value = Some(value.to_string()).filter(|v| !v.is_empty());
        match field {
            SelectionField::Zone => self.zone = value,
            SelectionField::Depth => self.depth = value,
            SelectionField::Angle => self.angle = value,
            SelectionField::WaterLevel => self.water_level = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_when_all_set() {
        let sel = UserSelection::new("ABC", "5", "15", "ผิวดิน");
        assert!(sel.is_complete());
        assert_eq!(sel.state(), SelectionState::Complete);
    }

    #[test]
    fn test_incomplete_when_any_missing_or_empty() {
        let full = UserSelection::new("ABC", "5", "15", "ผิวดิน");
        for field in [
            SelectionField::Zone,
            SelectionField::Depth,
            SelectionField::Angle,
            SelectionField::WaterLevel,
        ] {
            let mut missing = full.clone();
            missing.set(field, "");
            assert!(!missing.is_complete(), "{field:?} cleared");

            let mut empty = full.clone();
            match field {
                SelectionField::Zone => empty.zone = Some(String::new()),
                SelectionField::Depth => empty.depth = Some(String::new()),
                SelectionField::Angle => empty.angle = Some(String::new()),
                SelectionField::WaterLevel => empty.water_level = Some(String::new()),
            }
            assert_eq!(empty.state(), SelectionState::Incomplete, "{field:?} empty");
        }
        assert!(!UserSelection::default().is_complete());
    }

    #[test]
    fn test_field_keys() {
        assert_eq!(SelectionField::from_key("theta"), Some(SelectionField::Angle));
        assert_eq!(SelectionField::from_key("Water"), Some(SelectionField::WaterLevel));
        assert_eq!(SelectionField::from_key("colour"), None);
    }
}

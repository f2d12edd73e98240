//! Closed enumerations used as lookup and join keys

use serde::{Deserialize, Serialize};

/// Geological zone as selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneCode {
    #[serde(rename = "ABC")]
    Abc,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "EF")]
    Ef,
}

impl ZoneCode {
    pub const ALL: [ZoneCode; 3] = [ZoneCode::Abc, ZoneCode::D, ZoneCode::Ef];

    /// Parse a raw zone identifier ("ABC", "D", "EF")
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "ABC" => Some(ZoneCode::Abc),
            "D" => Some(ZoneCode::D),
            "EF" => Some(ZoneCode::Ef),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ZoneCode::Abc => "ABC",
            ZoneCode::D => "D",
            ZoneCode::Ef => "EF",
        }
    }

    /// Dataset group this zone was analysed under
    pub fn group_code(&self) -> GroupCode {
        match self {
            ZoneCode::Abc => GroupCode::G1,
            ZoneCode::D => GroupCode::G2,
            ZoneCode::Ef => GroupCode::G3,
        }
    }
}

impl std::fmt::Display for ZoneCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Join key of the result dataset and the picture tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupCode {
    G1,
    G2,
    G3,
}

impl GroupCode {
    pub const ALL: [GroupCode; 3] = [GroupCode::G1, GroupCode::G2, GroupCode::G3];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "G1" => Some(GroupCode::G1),
            "G2" => Some(GroupCode::G2),
            "G3" => Some(GroupCode::G3),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupCode::G1 => "G1",
            GroupCode::G2 => "G2",
            GroupCode::G3 => "G3",
        }
    }
}

impl std::fmt::Display for GroupCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Water level condition offered in the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterLevel {
    /// ระดับน้ำที่ผิวดิน
    GroundSurface,
    /// ไม่มีพิจารณาระดับน้ำ
    NotConsidered,
    /// ระดับน้ำลดลงอย่างรวดเร็ว
    RapidDrawdown,
}

impl WaterLevel {
    pub const ALL: [WaterLevel; 3] = [
        WaterLevel::GroundSurface,
        WaterLevel::NotConsidered,
        WaterLevel::RapidDrawdown,
    ];

    /// Parse either the Thai selector label or its ascii key
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|w| w.label() == label || w.key().eq_ignore_ascii_case(label))
    }

    /// Selector label in Thai
    pub fn label(&self) -> &'static str {
        match self {
            WaterLevel::GroundSurface => "ผิวดิน",
            WaterLevel::NotConsidered => "ไม่มีพิจารณาระดับน้ำ",
            WaterLevel::RapidDrawdown => "ลดลงอย่างรวดเร็ว",
        }
    }

    /// Ascii alias for terminal input
    pub fn key(&self) -> &'static str {
        match self {
            WaterLevel::GroundSurface => "surface",
            WaterLevel::NotConsidered => "none",
            WaterLevel::RapidDrawdown => "rapid",
        }
    }

    pub fn case_code(&self) -> CaseCode {
        match self {
            WaterLevel::GroundSurface => CaseCode::Wet,
            WaterLevel::NotConsidered => CaseCode::Dry,
            WaterLevel::RapidDrawdown => CaseCode::Rapid,
        }
    }
}

/// Hydraulic condition class used in the dataset and picture tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CaseCode {
    Dry,
    Wet,
    Rapid,
}

impl CaseCode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "DRY" => Some(CaseCode::Dry),
            "WET" => Some(CaseCode::Wet),
            "RAPID" => Some(CaseCode::Rapid),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseCode::Dry => "DRY",
            CaseCode::Wet => "WET",
            CaseCode::Rapid => "RAPID",
        }
    }
}

impl std::fmt::Display for CaseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Soil layer classification in the parameter table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Soft,
    Stiff,
    Sand,
}

impl LayerType {
    pub const ALL: [LayerType; 3] = [LayerType::Soft, LayerType::Stiff, LayerType::Sand];

    pub fn label(&self) -> &'static str {
        match self {
            LayerType::Soft => "Soft clay",
            LayerType::Stiff => "Stiff clay",
            LayerType::Sand => "Sand",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_maps_to_group() {
        assert_eq!(ZoneCode::from_label("ABC").map(|z| z.group_code()), Some(GroupCode::G1));
        assert_eq!(ZoneCode::from_label("D").map(|z| z.group_code()), Some(GroupCode::G2));
        assert_eq!(ZoneCode::from_label("EF").map(|z| z.group_code()), Some(GroupCode::G3));
        assert_eq!(ZoneCode::from_label("XYZ"), None);
        assert_eq!(ZoneCode::from_label(""), None);
    }

    #[test]
    fn test_water_level_accepts_label_and_key() {
        assert_eq!(WaterLevel::from_label("ผิวดิน"), Some(WaterLevel::GroundSurface));
        assert_eq!(WaterLevel::from_label("RAPID"), Some(WaterLevel::RapidDrawdown));
        assert_eq!(WaterLevel::from_label("none").map(|w| w.case_code()), Some(CaseCode::Dry));
        assert_eq!(WaterLevel::from_label("flooded"), None);
    }

    #[test]
    fn test_case_code_round_trip() {
        for code in ["DRY", "WET", "RAPID"] {
            assert_eq!(CaseCode::from_code(code).map(|c| c.as_str()), Some(code));
        }
        assert_eq!(CaseCode::from_code("wet"), None);
    }
}

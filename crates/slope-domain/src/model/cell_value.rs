//! Raw cell value from the result dataset

use serde::{Deserialize, Serialize};

/// A dataset cell that may hold a number, text, or nothing
///
/// Spreadsheet exports mix numeric cells with text such as `"N/A"` or `"1.25"`,
/// so both are kept as read and interpreted on demand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    #[default]
    Absent,
}

impl CellValue {
    /// Numeric interpretation of the cell, if it has one
    ///
    /// Empty text, `"-"`, `"N/A"` and non-finite values count as absent.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Text(s) => {
                let s = s.trim();
                if s.is_empty() || s == "-" || s.eq_ignore_ascii_case("N/A") {
                    return None;
                }
                s.parse::<f64>().ok().filter(|n| n.is_finite())
            }
            _ => None,
        }
    }

    /// Cell contents as text; numbers use Rust's shortest round-trip form
    ///
    /// Very small or large numbers print positionally (`0.0000001`), not in exponent form.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Absent => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_text_is_number() {
        assert_eq!(CellValue::from(" 1.25 ").as_number(), Some(1.25));
        assert_eq!(CellValue::from("8.64e-7").as_number(), Some(8.64e-7));
    }

    #[test]
    fn test_absent_markers() {
        for marker in ["", "  ", "-", "N/A", "n/a", "abc", "NaN", "inf"] {
            assert_eq!(CellValue::from(marker).as_number(), None, "{marker:?}");
        }
        assert_eq!(CellValue::Absent.as_number(), None);
        assert_eq!(CellValue::Number(f64::NAN).as_number(), None);
    }

    #[test]
    fn test_deserialize_mixed_cells() {
        let cells: Vec<CellValue> = serde_json::from_str(r#"[1.5, "N/A", null, 3]"#).unwrap();
        assert_eq!(
            cells,
            vec![
                CellValue::Number(1.5),
                CellValue::Text("N/A".to_string()),
                CellValue::Absent,
                CellValue::Number(3.0),
            ]
        );
    }

    #[test]
    fn test_number_text_drops_trailing_zero() {
        assert_eq!(CellValue::Number(15.0).as_text().as_deref(), Some("15"));
        assert_eq!(CellValue::Number(22.5).as_text().as_deref(), Some("22.5"));
    }
}

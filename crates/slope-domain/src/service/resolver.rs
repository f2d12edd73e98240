//! Exact-match lookup over the precomputed result dataset

use std::collections::BTreeMap;

use serde::Serialize;
use slope_types::{CaseCode, GroupCode};

use crate::model::{canonical_depth, normalize_angle, ResultRow};

/// Find the first row matching group, depth, case and angle
///
/// Depth is compared numerically so `"5"` matches a stored `5`, and angles are
/// compared without degree symbols so `"15"` matches `"15°"`. Rows are scanned
/// in dataset order; when keys repeat the earliest row wins.
pub fn find_result<'a>(
    dataset: &'a [ResultRow],
    group: GroupCode,
    depth: &str,
    case: CaseCode,
    angle: &str,
) -> Option<&'a ResultRow> {
    let depth = canonical_depth(depth)?;
    let angle = normalize_angle(angle);

    dataset.iter().find(|row| {
        row.group == group
            && row.depth_m == depth
            && row.case == case
            && normalize_angle(&row.degree) == angle
    })
}

/// Depths and angles present in the dataset for one group
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupOptions {
    pub depths: Vec<f64>,
    pub angles: Vec<String>,
    pub cases: Vec<CaseCode>,
}

/// Collect the selectable values per group, sorted
pub fn available_options(dataset: &[ResultRow]) -> BTreeMap<GroupCode, GroupOptions> {
    let mut options: BTreeMap<GroupCode, GroupOptions> = BTreeMap::new();

    for row in dataset {
        let entry = options.entry(row.group).or_default();
        entry.depths.push(row.depth_m);
        entry.angles.push(row.angle());
        entry.cases.push(row.case);
    }

    for entry in options.values_mut() {
        entry.depths.sort_by(|a, b| a.total_cmp(b));
        entry.depths.dedup();
        entry.angles.sort_by(|a, b| match (a.parse::<f64>(), b.parse::<f64>()) {
            (Ok(x), Ok(y)) => x.total_cmp(&y),
            _ => a.cmp(b),
        });
        entry.angles.dedup();
        entry.cases.sort();
        entry.cases.dedup();
    }

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;

    fn row(group: GroupCode, depth: f64, case: CaseCode, degree: &str, fs: f64) -> ResultRow {
        ResultRow {
            group,
            depth_m: depth,
            case,
            degree: degree.to_string(),
            factor_of_safety: CellValue::from(fs),
            displacement: CellValue::from(0.05),
        }
    }

    fn dataset() -> Vec<ResultRow> {
        vec![
            row(GroupCode::G1, 5.0, CaseCode::Wet, "15°", 1.234),
            row(GroupCode::G1, 5.0, CaseCode::Dry, "15°", 1.5),
            row(GroupCode::G2, 3.0, CaseCode::Wet, " 30° ", 1.1),
            row(GroupCode::G1, 7.5, CaseCode::Rapid, "20", 0.9),
        ]
    }

    #[test]
    fn test_exact_match() {
        let data = dataset();
        let found = find_result(&data, GroupCode::G1, "5", CaseCode::Dry, "15").unwrap();
        assert_eq!(found.factor_of_safety, CellValue::from(1.5));
    }

    #[test]
    fn test_angle_forms_are_equivalent() {
        let data = dataset();
        for angle in ["15°", " 15° ", "15"] {
            assert!(find_result(&data, GroupCode::G1, "5", CaseCode::Wet, angle).is_some(), "{angle:?}");
        }
        assert!(find_result(&data, GroupCode::G2, "3", CaseCode::Wet, "30").is_some());
        assert!(find_result(&data, GroupCode::G1, "7.5", CaseCode::Rapid, "20°").is_some());
    }

    #[test]
    fn test_depth_text_matches_number() {
        let data = dataset();
        assert!(find_result(&data, GroupCode::G1, "5", CaseCode::Wet, "15").is_some());
        assert!(find_result(&data, GroupCode::G1, "5.0", CaseCode::Wet, "15").is_some());
        assert!(find_result(&data, GroupCode::G1, "7.50", CaseCode::Rapid, "20").is_some());
        assert!(find_result(&data, GroupCode::G1, "five", CaseCode::Wet, "15").is_none());
    }

    #[test]
    fn test_no_match_is_none() {
        let data = dataset();
        assert!(find_result(&data, GroupCode::G1, "5", CaseCode::Wet, "20").is_none());
        assert!(find_result(&data, GroupCode::G3, "5", CaseCode::Wet, "15").is_none());
        assert!(find_result(&[], GroupCode::G1, "5", CaseCode::Wet, "15").is_none());
    }

    #[test]
    fn test_first_match_wins_on_duplicate_keys() {
        let data = vec![
            row(GroupCode::G1, 5.0, CaseCode::Wet, "15°", 1.111),
            row(GroupCode::G1, 5.0, CaseCode::Wet, "15", 2.222),
        ];
        let found = find_result(&data, GroupCode::G1, "5", CaseCode::Wet, "15").unwrap();
        assert_eq!(found.factor_of_safety, CellValue::from(1.111));
    }

    #[test]
    fn test_match_independent_of_order() {
        let mut data = dataset();
        data.reverse();
        let found = find_result(&data, GroupCode::G2, "3", CaseCode::Wet, "30").unwrap();
        assert_eq!(found.factor_of_safety, CellValue::from(1.1));
    }

    #[test]
    fn test_available_options() {
        let options = available_options(&dataset());
        let g1 = &options[&GroupCode::G1];
        assert_eq!(g1.depths, vec![5.0, 7.5]);
        assert_eq!(g1.angles, vec!["15".to_string(), "20".to_string()]);
        assert_eq!(g1.cases, vec![CaseCode::Dry, CaseCode::Wet, CaseCode::Rapid]);
        assert!(!options.contains_key(&GroupCode::G3));
    }
}

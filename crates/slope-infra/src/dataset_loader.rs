//! Result dataset loader (JSON or CSV)
//!
//! Accepts both the canonical column names (`GroupCode`, `Depth`, `Degree`,
//! `FactorOfSafety`, `Displacement`) and the spreadsheet headers the dataset is
//! exported with (`Zone`, `Depth (m)`, `Degree (°)`, `F.S.`, `X (m)`).

use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_874;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use slope_domain::model::{canonical_depth, CellValue, ResultRow};
use slope_types::{CaseCode, DatasetError, GroupCode};

#[derive(Error, Debug)]
pub enum DatasetLoaderError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Unsupported dataset file: {0}")]
    UnsupportedFormat(String),
}

impl From<DatasetLoaderError> for slope_types::Error {
    fn from(err: DatasetLoaderError) -> Self {
        match err {
            DatasetLoaderError::IoError(e) => slope_types::Error::Io(e),
            DatasetLoaderError::JsonError(e) => slope_types::Error::Json(e),
            DatasetLoaderError::CsvError(e) => slope_types::Error::Csv(e),
            DatasetLoaderError::MissingColumn(col) => {
                DatasetError::Parse(format!("missing column {}", col)).into()
            }
            DatasetLoaderError::UnsupportedFormat(name) => {
                DatasetError::UnsupportedFormat(name).into()
            }
        }
    }
}

const GROUP_COLUMNS: &[&str] = &["GroupCode", "Zone"];
const DEPTH_COLUMNS: &[&str] = &["Depth", "Depth (m)"];
const CASE_COLUMNS: &[&str] = &["Case"];
const DEGREE_COLUMNS: &[&str] = &["Degree", "Degree (°)"];
const FS_COLUMNS: &[&str] = &["FactorOfSafety", "F.S."];
const DISPLACEMENT_COLUMNS: &[&str] = &["Displacement", "X (m)"];

/// One dataset record before validation
#[derive(Debug, Default, Deserialize)]
struct RawResultRecord {
    #[serde(rename = "GroupCode", alias = "Zone", default)]
    group: Option<String>,
    #[serde(rename = "Depth", alias = "Depth (m)", default)]
    depth: CellValue,
    #[serde(rename = "Case", default)]
    case: Option<String>,
    #[serde(rename = "Degree", alias = "Degree (°)", default)]
    degree: CellValue,
    #[serde(rename = "FactorOfSafety", alias = "F.S.", default)]
    factor_of_safety: CellValue,
    #[serde(rename = "Displacement", alias = "X (m)", default)]
    displacement: CellValue,
}

impl RawResultRecord {
    /// Validate join keys; `None` for rows that can never match a selection
    fn into_row(self, row_num: usize) -> Option<ResultRow> {
        let Some(group) = self.group.as_deref().and_then(GroupCode::from_code) else {
            warn!(row = row_num, group = ?self.group, "skipping row with unknown group code");
            return None;
        };
        let Some(case) = self.case.as_deref().and_then(CaseCode::from_code) else {
            warn!(row = row_num, case = ?self.case, "skipping row with unknown case");
            return None;
        };
        let depth = match &self.depth {
            CellValue::Text(s) => canonical_depth(s),
            other => other.as_number(),
        };
        let Some(depth_m) = depth else {
            warn!(row = row_num, depth = ?self.depth, "skipping row with invalid depth");
            return None;
        };
        let Some(degree) = self.degree.as_text().filter(|d| !d.trim().is_empty()) else {
            warn!(row = row_num, "skipping row without degree");
            return None;
        };

        Some(ResultRow {
            group,
            depth_m,
            case,
            degree,
            factor_of_safety: self.factor_of_safety,
            displacement: self.displacement,
        })
    }
}

fn validate_records(records: Vec<RawResultRecord>) -> Vec<ResultRow> {
    let total = records.len();
    let rows: Vec<ResultRow> = records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| record.into_row(idx + 1))
        .collect();

    if rows.len() < total {
        warn!(skipped = total - rows.len(), total, "some dataset rows were skipped");
    }
    rows
}

/// Load a dataset file, choosing the parser by extension
pub fn load_result_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<ResultRow>, DatasetLoaderError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let rows = match extension.as_deref() {
        Some("json") => parse_json_dataset(&fs::read_to_string(path)?)?,
        Some("csv") => parse_csv_dataset(&fs::read(path)?)?,
        _ => {
            return Err(DatasetLoaderError::UnsupportedFormat(
                path.display().to_string(),
            ))
        }
    };

    info!(path = %path.display(), rows = rows.len(), "loaded result dataset");
    Ok(rows)
}

/// Parse a JSON array of result objects
pub fn parse_json_dataset(content: &str) -> Result<Vec<ResultRow>, DatasetLoaderError> {
    let records: Vec<RawResultRecord> = serde_json::from_str(content)?;
    Ok(validate_records(records))
}

/// Parse CSV bytes in UTF-8 or Windows-874 (Thai spreadsheet export)
pub fn parse_csv_dataset(bytes: &[u8]) -> Result<Vec<ResultRow>, DatasetLoaderError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    let decoded = match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (text, _, had_errors) = WINDOWS_874.decode(bytes);
            if had_errors {
                warn!("some characters could not be decoded from Windows-874");
            }
            text.into_owned()
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(decoded.as_bytes());

    let headers = reader.headers()?.clone();
    let required = |names: &[&str]| {
        find_column(&headers, names).ok_or_else(|| DatasetLoaderError::MissingColumn(names[0].to_string()))
    };
    let group_col = required(GROUP_COLUMNS)?;
    let depth_col = required(DEPTH_COLUMNS)?;
    let case_col = required(CASE_COLUMNS)?;
    let degree_col = required(DEGREE_COLUMNS)?;
    let fs_col = find_column(&headers, FS_COLUMNS);
    let displacement_col = find_column(&headers, DISPLACEMENT_COLUMNS);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let text = |col: usize| record.get(col).filter(|s| !s.is_empty()).map(str::to_string);
        let cell = |col: Option<usize>| match col.and_then(|c| record.get(c)) {
            Some(s) if !s.is_empty() => CellValue::Text(s.to_string()),
            _ => CellValue::Absent,
        };

        records.push(RawResultRecord {
            group: text(group_col),
            depth: cell(Some(depth_col)),
            case: text(case_col),
            degree: cell(Some(degree_col)),
            factor_of_safety: cell(fs_col),
            displacement: cell(displacement_col),
        });
    }

    Ok(validate_records(records))
}

fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.trim_start_matches('\u{feff}') == *n))
}

//! Index of diagram images found in the picture tree
//!
//! Expects `<root>/<zone dir>/<case dir>/<zone>_<CASE>_<degree>_<depth>m.png`.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use slope_domain::service::parse_image_file_name;
use slope_types::{CaseCode, Error, Result};

/// One indexed diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageIndexEntry {
    #[serde(rename = "Zone")]
    pub zone: String,
    #[serde(rename = "Water")]
    pub water: CaseCode,
    #[serde(rename = "Degree")]
    pub degree: u32,
    #[serde(rename = "Depth")]
    pub depth: String,
    #[serde(rename = "File")]
    pub file: String,
}

/// Scan the picture tree for diagram files
pub fn scan_image_index(root: &Path) -> Result<Vec<ImageIndexEntry>> {
    if !root.is_dir() {
        return Err(Error::FileNotFound(root.display().to_string()));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(3)
        .max_depth(3)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let Some(parsed) = parse_image_file_name(&name) else {
            debug!(file = %entry.path().display(), "not a diagram file name");
            continue;
        };

        entries.push(ImageIndexEntry {
            zone: parsed.zone,
            water: parsed.water,
            degree: parsed.degree,
            depth: parsed.depth,
            file: entry.path().display().to_string(),
        });
    }

    Ok(entries)
}

/// Write the index as pretty JSON
pub fn write_image_index(entries: &[ImageIndexEntry], output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(entries)?;
    fs::write(output, content)?;
    Ok(())
}

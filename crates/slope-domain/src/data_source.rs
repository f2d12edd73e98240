//! Result dataset availability
//!
//! The dataset arrives once, possibly after the first user interaction. Until it
//! does, lookups report it as unavailable instead of searching an empty table.

use slope_types::{CaseCode, GroupCode, Result};
use tracing::{debug, error, info, warn};

use crate::model::ResultRow;
use crate::service::find_result;

/// Dataset holder with two states
#[derive(Debug, Clone, Default)]
pub enum DataSource {
    #[default]
    Unloaded,
    Loaded(Vec<ResultRow>),
}

/// Outcome of a dataset lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// Dataset not loaded (pending or failed)
    Unavailable,
    NoMatch,
    Found(&'a ResultRow),
}

impl DataSource {
    /// Build from a load attempt; a failure is reported once and leaves the source unloaded
    pub fn from_load(result: Result<Vec<ResultRow>>) -> Self {
        match result {
            Ok(rows) => {
                info!(rows = rows.len(), "result dataset loaded");
                DataSource::Loaded(rows)
            }
            Err(e) => {
                error!(error = %e, "result dataset load failed");
                DataSource::Unloaded
            }
        }
    }

    /// Install rows if none are loaded yet; returns false if already loaded
    pub fn install(&mut self, rows: Vec<ResultRow>) -> bool {
        if self.is_loaded() {
            warn!("result dataset already loaded, ignoring second load");
            return false;
        }
        info!(rows = rows.len(), "result dataset installed");
        *self = DataSource::Loaded(rows);
        true
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, DataSource::Loaded(_))
    }

    pub fn rows(&self) -> Option<&[ResultRow]> {
        match self {
            DataSource::Loaded(rows) => Some(rows),
            DataSource::Unloaded => None,
        }
    }

    pub fn lookup(&self, group: GroupCode, depth: &str, case: CaseCode, angle: &str) -> Lookup<'_> {
        let Some(rows) = self.rows() else {
            debug!("lookup refused, dataset unavailable");
            return Lookup::Unavailable;
        };

        match find_result(rows, group, depth, case, angle) {
            Some(row) => {
                debug!(%group, depth, %case, angle, "result found");
                Lookup::Found(row)
            }
            None => {
                debug!(%group, depth, %case, angle, "no matching result");
                Lookup::NoMatch
            }
        }
    }
}

//! Dataset loading off the interaction thread
//!
//! The loader thread only produces rows; installing them into the lookup
//! service happens on the interaction thread between events.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use slope_domain::model::ResultRow;
use slope_domain::repository::ResultDatasetRepository;
use slope_infra::persistence::FileResultDatasetRepository;
use slope_types::Result;
use tracing::{debug, error};

/// Pending result of a background dataset load
pub struct DatasetLoadHandle {
    receiver: Option<Receiver<Result<Vec<ResultRow>>>>,
}

impl DatasetLoadHandle {
    /// Take the loaded rows if the load has finished
    ///
    /// Returns `None` while pending and after the outcome was taken. A failed
    /// load is logged once and never retried.
    pub fn poll(&mut self) -> Option<Vec<ResultRow>> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(Ok(rows)) => {
                self.receiver = None;
                Some(rows)
            }
            Ok(Err(e)) => {
                error!(error = %e, "result dataset load failed");
                self.receiver = None;
                None
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                error!("result dataset loader exited without a result");
                self.receiver = None;
                None
            }
        }
    }

    /// Block until the load finishes
    pub fn wait(mut self) -> Option<Vec<ResultRow>> {
        let receiver = self.receiver.take()?;
        match receiver.recv() {
            Ok(Ok(rows)) => Some(rows),
            Ok(Err(e)) => {
                error!(error = %e, "result dataset load failed");
                None
            }
            Err(_) => {
                error!("result dataset loader exited without a result");
                None
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }
}

/// Start loading the dataset at `path` on a separate thread
pub fn spawn_dataset_load(path: PathBuf) -> DatasetLoadHandle {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        debug!(path = %path.display(), "loading result dataset in background");
        let repo = FileResultDatasetRepository::new(path);
        // Receiver may be gone if the session already ended
        let _ = tx.send(repo.load_all());
    });

    DatasetLoadHandle { receiver: Some(rx) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_background_load_completes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("PTT_FS.json");
        fs::write(
            &path,
            r#"[{"GroupCode": "G1", "Depth": 5, "Case": "WET", "Degree": "15°", "FactorOfSafety": 1.234}]"#,
        )
        .unwrap();

        let handle = spawn_dataset_load(path);
        let rows = handle.wait().unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_background_load_failure_yields_nothing() {
        let dir = tempdir().unwrap();
        let handle = spawn_dataset_load(dir.path().join("missing.json"));
        assert!(handle.wait().is_none());
    }

    #[test]
    fn test_poll_until_done() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("PTT_FS.json");
        fs::write(&path, "[]").unwrap();

        let mut handle = spawn_dataset_load(path);
        let rows = loop {
            if let Some(rows) = handle.poll() {
                break rows;
            }
            assert!(handle.is_pending(), "load ended without rows");
            std::thread::sleep(std::time::Duration::from_millis(5));
        };
        assert!(rows.is_empty());
        assert!(!handle.is_pending());
    }
}

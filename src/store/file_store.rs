use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::models::Snapshot;
use crate::services::windowing;
use crate::store::{SnapshotStore, StoreError};

/// Reads scan snapshots from a JSON array file written by the scanner.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn list_snapshots(
        &self,
        since_hours: Option<i64>,
    ) -> Result<Vec<Snapshot>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", self.path.display(), e)))?;

        let values: Vec<serde_json::Value> = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Malformed(format!("{}: {}", self.path.display(), e)))?;

        // Each record is deserialized on its own so one bad entry (bad
        // timestamp, wrong shape) never poisons the batch.
        let mut snapshots = Vec::with_capacity(values.len());
        let mut skipped = 0usize;
        for value in values {
            match serde_json::from_value::<Snapshot>(value) {
                Ok(snapshot) => snapshots.push(snapshot),
                Err(e) => {
                    skipped += 1;
                    debug!("Skipping malformed scan record: {}", e);
                }
            }
        }
        if skipped > 0 {
            warn!("Skipped {} malformed scan records", skipped);
        }

        match since_hours {
            Some(hours) => Ok(windowing::recent_window(&snapshots, hours)),
            None => Ok(snapshots),
        }
    }
}

mod file_store;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::Snapshot;

pub use file_store::FileSnapshotStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("scan data unavailable: {0}")]
    Unavailable(String),

    #[error("scan data unreadable: {0}")]
    Malformed(String),
}

/// Source of scan snapshots. Individual malformed records are skipped by
/// the implementation, never surfaced as a batch failure.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Full history when `since_hours` is `None`, otherwise only snapshots
    /// within the trailing window, ascending by timestamp.
    async fn list_snapshots(&self, since_hours: Option<i64>)
        -> Result<Vec<Snapshot>, StoreError>;
}

/// Candidate scan file locations, first existing wins. `SCAN_DATA_PATH`
/// overrides the list entirely.
const STORE_CANDIDATES: [&str; 3] = [
    "data/scans.json",
    "../data/scans.json",
    "/var/lib/moodscan/scans.json",
];

/// Resolve the scan data location once at process start.
pub fn resolve_store() -> FileSnapshotStore {
    if let Ok(path) = std::env::var("SCAN_DATA_PATH") {
        info!("Using scan data from SCAN_DATA_PATH: {}", path);
        return FileSnapshotStore::new(path);
    }

    for candidate in STORE_CANDIDATES {
        if std::path::Path::new(candidate).exists() {
            info!("Using scan data file: {}", candidate);
            return FileSnapshotStore::new(candidate);
        }
    }

    warn!(
        "No scan data file found, defaulting to {} (reports will be empty until it appears)",
        STORE_CANDIDATES[0]
    );
    FileSnapshotStore::new(STORE_CANDIDATES[0])
}

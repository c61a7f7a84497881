use chrono::{DateTime, Duration, Utc};

use crate::models::Snapshot;

/// Snapshots within the trailing `hours` window, ascending by timestamp.
/// Empty input yields empty output.
pub fn recent_window(snapshots: &[Snapshot], hours: i64) -> Vec<Snapshot> {
    window_since(snapshots, Utc::now() - Duration::hours(hours))
}

pub fn window_since(snapshots: &[Snapshot], cutoff: DateTime<Utc>) -> Vec<Snapshot> {
    let mut windowed: Vec<Snapshot> = snapshots
        .iter()
        .filter(|s| s.timestamp >= cutoff)
        .cloned()
        .collect();
    windowed.sort_by_key(|s| s.timestamp);
    windowed
}

use std::sync::Arc;

use crate::store::SnapshotStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SnapshotStore>,
}

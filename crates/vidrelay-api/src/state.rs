//! Application state shared by all handlers.

use std::sync::Arc;
use vidrelay_storage::Storage;

/// Handlers only talk to the storage backend; there is no other
/// cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

//! Storage setup and initialization

use anyhow::Result;
use std::sync::Arc;
use vidrelay_core::constants::CONTAINER_NAME;
use vidrelay_core::Config;
use vidrelay_storage::{create_storage, Storage};

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!(
        backend = %config.storage_backend(),
        container = CONTAINER_NAME,
        "Initializing storage..."
    );
    let storage = create_storage(config).await?;
    tracing::info!(
        backend = ?storage.backend_type(),
        container_url = %storage.container_url(),
        "Storage initialized successfully"
    );
    Ok(storage)
}

use crate::{
    AzureBlobStorage, InMemoryStorage, LocalStorage, Storage, StorageBackend, StorageError,
    StorageResult,
};
use std::path::Path;
use std::sync::Arc;
use vidrelay_core::constants::CONTAINER_NAME;
use vidrelay_core::Config;

/// Create a storage backend for the fixed container based on configuration
pub async fn create_storage(config: &Config) -> StorageResult<Arc<dyn Storage>> {
    match config.storage_backend() {
        StorageBackend::Azure => {
            let connection_string = config.azure_storage_connection_string().ok_or_else(|| {
                StorageError::ConfigError(
                    "AZURE_STORAGE_CONNECTION_STRING not configured".to_string(),
                )
            })?;

            let storage = AzureBlobStorage::from_connection_string(connection_string, CONTAINER_NAME)?;
            Ok(Arc::new(storage))
        }

        StorageBackend::Local => {
            let base_path = config.local_storage_path().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_PATH not configured".to_string())
            })?;
            let base_url = config.local_storage_base_url().ok_or_else(|| {
                StorageError::ConfigError("LOCAL_STORAGE_BASE_URL not configured".to_string())
            })?;

            let storage = LocalStorage::new(
                Path::new(base_path).join(CONTAINER_NAME),
                format!("{}/{}", base_url.trim_end_matches('/'), CONTAINER_NAME),
            )
            .await?;
            Ok(Arc::new(storage))
        }

        StorageBackend::Memory => Ok(Arc::new(InMemoryStorage::new(format!(
            "memory://{}",
            CONTAINER_NAME
        )))),
    }
}

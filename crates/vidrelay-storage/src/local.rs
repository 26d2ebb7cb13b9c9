use crate::objects;
use crate::traits::{ObjectStream, Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use object_store::local::LocalFileSystem;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;

/// Local filesystem storage implementation
///
/// Objects live under `base_path`; names containing `/` become
/// subdirectories. The content type is not persisted.
#[derive(Clone)]
pub struct LocalStorage {
    store: Arc<LocalFileSystem>,
    base_path: PathBuf,
    base_url: String,
}

impl LocalStorage {
    /// Create a new LocalStorage instance
    ///
    /// # Arguments
    /// * `base_path` - Root directory for object storage (e.g., "/var/lib/vidrelay/new")
    /// * `base_url` - Base URL the directory is served under (e.g., "http://localhost:5000/new")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        let store = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(LocalStorage {
            store: Arc::new(store),
            base_path,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn container_label(&self) -> String {
        self.base_path.display().to_string()
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        _content_type: &str,
    ) -> StorageResult<String> {
        objects::put_object(
            self.store.as_ref(),
            &self.container_label(),
            storage_key,
            data,
            None,
        )
        .await?;
        Ok(self.object_url(storage_key))
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        objects::get_object(self.store.as_ref(), &self.container_label(), storage_key).await
    }

    async fn list(&self) -> StorageResult<ObjectStream> {
        Ok(objects::list_objects(
            self.store.as_ref(),
            &self.container_label(),
        ))
    }

    fn container_url(&self) -> &str {
        &self.base_url
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

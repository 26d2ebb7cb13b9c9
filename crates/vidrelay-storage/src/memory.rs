use crate::objects;
use crate::traits::{ObjectStream, Storage, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use object_store::memory::InMemory;
use std::sync::Arc;

const MEMORY_CONTAINER: &str = "memory";

/// In-memory storage, for tests and local development. Contents are lost
/// when the process exits.
#[derive(Clone)]
pub struct InMemoryStorage {
    store: Arc<InMemory>,
    container_url: String,
}

impl InMemoryStorage {
    pub fn new(container_url: impl Into<String>) -> Self {
        let container_url: String = container_url.into();
        InMemoryStorage {
            store: Arc::new(InMemory::new()),
            container_url: container_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String> {
        objects::put_object(
            self.store.as_ref(),
            MEMORY_CONTAINER,
            storage_key,
            data,
            Some(content_type),
        )
        .await?;
        Ok(self.object_url(storage_key))
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        objects::get_object(self.store.as_ref(), MEMORY_CONTAINER, storage_key).await
    }

    async fn list(&self) -> StorageResult<ObjectStream> {
        Ok(objects::list_objects(self.store.as_ref(), MEMORY_CONTAINER))
    }

    fn container_url(&self) -> &str {
        &self.container_url
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}

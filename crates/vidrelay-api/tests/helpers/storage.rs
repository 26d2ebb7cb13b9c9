//! Storage doubles that count calls and fail on demand.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use vidrelay_storage::{
    InMemoryStorage, ObjectStream, Storage, StorageBackend, StorageError, StorageResult,
    StoredObject,
};

/// Where a listing should break, if at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFailure {
    None,
    /// `list()` itself returns an error
    OnOpen,
    /// The first object is yielded, then the stream errors
    MidStream,
}

/// In-memory storage wrapper with scripted failures and call counters.
pub struct ScriptedStorage {
    pub inner: InMemoryStorage,
    pub fail_uploads: bool,
    pub list_failure: ListFailure,
    pub upload_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    /// `(key, content_type)` of every upload attempt, in order
    pub uploads: Mutex<Vec<(String, String)>>,
}

impl ScriptedStorage {
    pub fn new(container_url: &str) -> Self {
        Self {
            inner: InMemoryStorage::new(container_url),
            fail_uploads: false,
            list_failure: ListFailure::None,
            upload_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            uploads: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_uploads(mut self) -> Self {
        self.fail_uploads = true;
        self
    }

    pub fn failing_list(mut self, failure: ListFailure) -> Self {
        self.list_failure = failure;
        self
    }

    pub fn upload_calls(&self) -> usize {
        self.upload_calls.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn recorded_uploads(&self) -> Vec<(String, String)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for ScriptedStorage {
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.uploads
            .lock()
            .unwrap()
            .push((storage_key.to_string(), content_type.to_string()));
        if self.fail_uploads {
            return Err(StorageError::UploadFailed(
                "simulated backend outage".to_string(),
            ));
        }
        self.inner
            .upload_with_key(storage_key, data, content_type)
            .await
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        self.inner.download(storage_key).await
    }

    async fn list(&self) -> StorageResult<ObjectStream> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        match self.list_failure {
            ListFailure::None => self.inner.list().await,
            ListFailure::OnOpen => Err(StorageError::ListFailed(
                "simulated listing outage".to_string(),
            )),
            ListFailure::MidStream => {
                let first = StoredObject {
                    name: "first.mp4".to_string(),
                    size: 1,
                };
                let items = vec![
                    Ok(first),
                    Err(StorageError::ListFailed("connection reset".to_string())),
                ];
                Ok(stream::iter(items).boxed())
            }
        }
    }

    fn container_url(&self) -> &str {
        self.inner.container_url()
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Memory
    }
}

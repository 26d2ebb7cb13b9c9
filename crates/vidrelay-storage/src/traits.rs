//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use futures::stream::BoxStream;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Listing failed: {0}")]
    ListFailed(String),

    #[error("Object not found: {0}")]
    NotFound(String),

    /// The name cannot be used verbatim as an object key.
    #[error("Invalid object name: {0}")]
    InvalidName(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// One entry of a container listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Object name as stored, including any `/` separators
    pub name: String,
    pub size: u64,
}

/// Lazy, finite stream of listed objects. It cannot be restarted; call
/// [`Storage::list`] again for a fresh enumeration.
pub type ObjectStream = BoxStream<'static, StorageResult<StoredObject>>;

/// Storage abstraction trait
///
/// The relay only writes whole objects and enumerates them; every backend
/// overwrites silently on a name collision and never retries.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload data under `storage_key` with the given content type.
    /// Returns the URL of the stored object.
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String>;

    /// Download an object by its storage key
    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>>;

    /// Flat listing of every object in the container, in the order the
    /// backend returns them.
    async fn list(&self) -> StorageResult<ObjectStream>;

    /// Base URL of the container, without a trailing slash
    fn container_url(&self) -> &str;

    /// URL of a single object, with each path segment percent-encoded
    fn object_url(&self, storage_key: &str) -> String {
        crate::keys::object_url(self.container_url(), storage_key)
    }

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}

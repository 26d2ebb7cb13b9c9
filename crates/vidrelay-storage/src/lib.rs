//! Vidrelay Storage Library
//!
//! This crate provides the storage abstraction used by the upload relay and
//! its implementations: Azure Blob Storage, the local filesystem, and an
//! in-memory store. All of them sit on top of `object_store`.
//!
//! # Object names
//!
//! Objects are stored under the name the client supplied, without any
//! tenant prefix or sanitization. Names containing `/` become nested virtual
//! paths; empty path segments are dropped by `object_store`.

pub mod azure;
pub mod connection_string;
pub mod factory;
pub(crate) mod keys;
pub mod local;
pub mod memory;
pub(crate) mod objects;
pub mod traits;

// Re-export commonly used types
pub use azure::AzureBlobStorage;
pub use connection_string::AzureConnectionString;
pub use factory::create_storage;
pub use local::LocalStorage;
pub use memory::InMemoryStorage;
pub use traits::{ObjectStream, Storage, StorageError, StorageResult, StoredObject};
pub use vidrelay_core::StorageBackend;

//! Vidrelay Core Library
//!
//! Configuration, error types and shared constants used by the storage
//! and API crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, BodyFormat, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;

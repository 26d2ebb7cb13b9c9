//! Operations shared by every `object_store`-backed implementation.

use crate::keys;
use crate::traits::{ObjectStream, StorageError, StorageResult, StoredObject};
use bytes::Bytes;
use futures::StreamExt;
use object_store::{
    Attribute, Attributes, Error as ObjectStoreError, GetOptions, ObjectStore, PutOptions,
    PutPayload,
};
use std::time::Instant;

/// Write `data` to `key`, replacing any existing object.
///
/// `content_type` is recorded as the object's `Content-Type` when given;
/// backends that cannot persist attributes pass `None`.
pub async fn put_object(
    store: &dyn ObjectStore,
    container: &str,
    key: &str,
    data: Vec<u8>,
    content_type: Option<&str>,
) -> StorageResult<()> {
    let size = data.len() as u64;
    let location = keys::object_path(key)?;
    let start = Instant::now();

    let mut attributes = Attributes::new();
    if let Some(content_type) = content_type {
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
    }
    let options = PutOptions {
        attributes,
        ..Default::default()
    };

    store
        .put_opts(&location, PutPayload::from(Bytes::from(data)), options)
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                container = %container,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Object upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

    tracing::info!(
        container = %container,
        key = %key,
        size_bytes = size,
        content_type = content_type.unwrap_or("-"),
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Object upload successful"
    );

    Ok(())
}

pub async fn get_object(store: &dyn ObjectStore, container: &str, key: &str) -> StorageResult<Vec<u8>> {
    let location = keys::object_path(key)?;

    let result = store
        .get_opts(&location, GetOptions::default())
        .await
        .map_err(|e| map_download_error(e, container, key))?;

    let bytes = result
        .bytes()
        .await
        .map_err(|e| map_download_error(e, container, key))?;

    tracing::debug!(
        container = %container,
        key = %key,
        size_bytes = bytes.len(),
        "Object download successful"
    );

    Ok(bytes.to_vec())
}

fn map_download_error(err: ObjectStoreError, container: &str, key: &str) -> StorageError {
    match err {
        ObjectStoreError::NotFound { .. } => StorageError::NotFound(key.to_string()),
        other => {
            tracing::error!(
                error = %other,
                container = %container,
                key = %key,
                "Object download failed"
            );
            StorageError::DownloadFailed(other.to_string())
        }
    }
}

/// Flat, recursive listing of the whole store. Errors are reported per item
/// as the underlying pages are fetched.
pub fn list_objects(store: &dyn ObjectStore, container: &str) -> ObjectStream {
    let container = container.to_string();
    store
        .list(None)
        .map(move |item| match item {
            Ok(meta) => Ok(StoredObject {
                name: keys::object_name(&meta.location),
                size: meta.size,
            }),
            Err(e) => {
                tracing::error!(error = %e, container = %container, "Object listing failed");
                Err(StorageError::ListFailed(e.to_string()))
            }
        })
        .boxed()
}

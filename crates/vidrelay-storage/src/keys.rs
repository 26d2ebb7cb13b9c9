//! Mapping between client-supplied object names, `object_store` paths and URLs.
//!
//! Names are used verbatim as keys. `Path::parse` keeps the raw string, so
//! characters like `[`, `#` or `%` reach the backend untouched.

use crate::traits::{StorageError, StorageResult};
use object_store::path::Path;

/// Path under which `name` is stored.
///
/// Fails with [`StorageError::InvalidName`] when the name cannot be stored
/// under exactly that string: empty names, empty segments (`a//b`, leading
/// or trailing `/`), `.`/`..` segments and control characters.
pub fn object_path(name: &str) -> StorageResult<Path> {
    if name.is_empty() {
        return Err(StorageError::InvalidName("empty name".to_string()));
    }

    let path = Path::parse(name).map_err(|e| StorageError::InvalidName(e.to_string()))?;

    // parse() silently strips a leading or trailing delimiter
    if path.as_ref() != name {
        return Err(StorageError::InvalidName(format!(
            "{:?} has a leading or trailing '/'",
            name
        )));
    }

    Ok(path)
}

/// Object name of a listed path, as the backend reports it.
pub fn object_name(path: &Path) -> String {
    path.as_ref().to_string()
}

/// `{container_url}/{name}` with every segment of `name` percent-encoded.
pub fn object_url(container_url: &str, name: &str) -> String {
    let encoded = name
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/{}", container_url.trim_end_matches('/'), encoded)
}

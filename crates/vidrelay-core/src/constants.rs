//! Shared constants.

/// Name of the blob container every upload goes to. Not configurable.
pub const CONTAINER_NAME: &str = "new";

/// Port used when `PORT` is not set.
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Multipart field carrying the uploaded video.
pub const UPLOAD_FIELD_NAME: &str = "video";

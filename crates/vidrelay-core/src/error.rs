//! Error types module
//!
//! All request-level failures are unified under [`AppError`]. Each variant
//! describes how it is presented to the client through [`ErrorMetadata`];
//! the HTTP crate turns that description into a response.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like a missing upload
    Debug,
    /// Warning level - for malformed client input
    Warn,
    /// Error level - for storage backend failures
    Error,
}

/// Shape of the response body for an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyFormat {
    /// `text/plain` body holding the client message
    PlainText,
    /// JSON object `{"error": <client message>}`
    Json,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "UPLOAD_FAILED"), used in logs
    fn error_code(&self) -> &'static str;

    /// Client-facing message (never carries backend details)
    fn client_message(&self) -> String;

    /// Body format of the response
    fn body_format(&self) -> BodyFormat;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file uploaded")]
    NoFileUploaded,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Listing failed: {0}")]
    ListFailed(String),
}

impl AppError {
    /// Variant name, for structured logging.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::NoFileUploaded => "NoFileUploaded",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::UploadFailed(_) => "UploadFailed",
            AppError::ListFailed(_) => "ListFailed",
        }
    }
}

/// Static metadata for each variant: (http_status, error_code, body_format, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, BodyFormat, LogLevel) {
    match err {
        AppError::NoFileUploaded => (
            400,
            "NO_FILE_UPLOADED",
            BodyFormat::PlainText,
            LogLevel::Debug,
        ),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", BodyFormat::PlainText, LogLevel::Warn),
        AppError::UploadFailed(_) => (500, "UPLOAD_FAILED", BodyFormat::PlainText, LogLevel::Error),
        AppError::ListFailed(_) => (500, "LIST_FAILED", BodyFormat::Json, LogLevel::Error),
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn body_format(&self) -> BodyFormat {
        app_error_static_metadata(self).2
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).3
    }

    fn client_message(&self) -> String {
        match self {
            AppError::NoFileUploaded => "No file uploaded.".to_string(),
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::UploadFailed(_) => "Error uploading video.".to_string(),
            AppError::ListFailed(_) => "Failed to fetch video URLs".to_string(),
        }
    }
}

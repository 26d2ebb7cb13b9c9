//! HTTP error response conversion
//!
//! Handlers return `Result<_, HttpAppError>`. The wrapped [`AppError`] decides
//! the status code and whether the body is plain text or a JSON object; the
//! full error, including any backend detail, only goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use vidrelay_core::{AppError, BodyFormat, ErrorMetadata, LogLevel};
use vidrelay_storage::StorageError;

/// JSON error body: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rules: IntoResponse and AppError both live in other crates).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl HttpAppError {
    /// A storage failure while writing an upload.
    pub fn upload_failed(err: StorageError) -> Self {
        HttpAppError(AppError::UploadFailed(err.to_string()))
    }

    /// A storage failure while opening or reading a listing.
    pub fn list_failed(err: StorageError) -> Self {
        HttpAppError(AppError::ListFailed(err.to_string()))
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type, code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type, code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type, code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        log_error(app_error);

        match app_error.body_format() {
            BodyFormat::PlainText => (status, app_error.client_message()).into_response(),
            BodyFormat::Json => (
                status,
                Json(ErrorResponse {
                    error: app_error.client_message(),
                }),
            )
                .into_response(),
        }
    }
}

//! Multipart extraction for the upload handler

use axum::extract::Multipart;
use vidrelay_core::constants::UPLOAD_FIELD_NAME;
use vidrelay_core::AppError;

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A file received in a multipart request. Lives for one request only.
#[derive(Debug)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub original_filename: String,
    pub content_type: String,
}

/// Extract the single file sent in the `video` field.
///
/// A `video` part without a filename is a plain form field, not a file, and
/// is skipped like any other field. A second `video` file is rejected.
/// Returns [`AppError::NoFileUploaded`] when no file was sent.
pub async fn extract_video_file(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }
        let Some(original_filename) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        if file.is_some() {
            return Err(AppError::InvalidInput(format!(
                "Multiple file fields are not allowed; send exactly one field named '{}'",
                UPLOAD_FIELD_NAME
            )));
        }

        let content_type = field
            .content_type()
            .map(|s| s.to_string())
            .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

        file = Some(UploadedFile {
            data: data.to_vec(),
            original_filename,
            content_type,
        });
    }

    file.ok_or(AppError::NoFileUploaded)
}

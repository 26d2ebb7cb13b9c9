use crate::error::HttpAppError;
use crate::models::UploadResponse;
use crate::state::AppState;
use crate::utils::upload::extract_video_file;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use std::sync::Arc;
use vidrelay_core::AppError;

/// `POST /upload`: store the `video` file under its original filename.
///
/// A request that is not multipart at all carries no file, so it gets the
/// same 400 as a multipart body without one.
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!(rejection = %rejection, "Upload request is not multipart");
        AppError::NoFileUploaded
    })?;

    let file = extract_video_file(multipart).await?;
    let size = file.data.len();

    tracing::debug!(
        filename = %file.original_filename,
        content_type = %file.content_type,
        size_bytes = size,
        "Received video upload"
    );

    let video_url = state
        .storage
        .upload_with_key(&file.original_filename, file.data, &file.content_type)
        .await
        .map_err(HttpAppError::upload_failed)?;

    tracing::info!(
        filename = %file.original_filename,
        size_bytes = size,
        video_url = %video_url,
        "Video uploaded"
    );

    Ok(Json(UploadResponse::uploaded(video_url)))
}

use crate::error::HttpAppError;
use crate::models::VideoEntry;
use crate::state::AppState;
use axum::{extract::State, Json};
use futures::TryStreamExt;
use std::sync::Arc;

/// `GET /getVideos`: every object in the container, in listing order.
///
/// The entries are rebuilt on each call, so ids change between calls.
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<VideoEntry>>, HttpAppError> {
    let container_url = state.storage.container_url();
    let mut objects = state
        .storage
        .list()
        .await
        .map_err(HttpAppError::list_failed)?;

    let mut videos = Vec::new();
    while let Some(object) = objects
        .try_next()
        .await
        .map_err(HttpAppError::list_failed)?
    {
        videos.push(VideoEntry::new(container_url, object.name));
    }

    tracing::debug!(count = videos.len(), "Listed videos");

    Ok(Json(videos))
}

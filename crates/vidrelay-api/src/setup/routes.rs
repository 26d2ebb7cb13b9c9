//! Route configuration and setup.

use crate::handlers::{video_list::list_videos, video_upload::upload_video};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Setup all application routes
///
/// Uploads are not size-limited: the default multipart body limit is
/// lifted on `/upload`, and the whole body is buffered in memory.
pub fn setup_routes(state: Arc<AppState>) -> Router<()> {
    Router::new()
        .route(
            "/upload",
            post(upload_video).layer(DefaultBodyLimit::disable()),
        )
        .route("/getVideos", get(list_videos))
        .layer(TraceLayer::new_for_http())
        .layer(setup_cors())
        .with_state(state)
}

/// Any origin may call the relay.
fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(Any)
}

//! Response bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of a successful `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: String,
    pub video_url: String,
}

impl UploadResponse {
    pub fn uploaded(video_url: String) -> Self {
        Self {
            message: "Video uploaded successfully!".to_string(),
            video_url,
        }
    }
}

/// One element of the `GET /getVideos` array.
///
/// `id` is generated per listing and is not stable: the same object gets a
/// different id on every call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoEntry {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl VideoEntry {
    pub fn new(container_url: &str, name: String) -> Self {
        let url = format!("{}/{}", container_url, name);
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            url,
        }
    }
}

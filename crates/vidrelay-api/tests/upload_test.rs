//! Upload endpoint integration tests.
//!
//! Run with: `cargo test -p vidrelay-api --test upload_test`

mod helpers;

use axum::body::Bytes;
use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use futures::TryStreamExt;
use helpers::{setup_app_with, setup_test_app, video_form, ScriptedStorage, CONTAINER_URL};
use vidrelay_api::models::UploadResponse;
use vidrelay_storage::Storage;

#[tokio::test]
async fn test_upload_stores_file_under_original_name() {
    let app = setup_test_app();
    let bytes = b"\x00\x00\x00\x18ftypmp42 fake video".to_vec();

    let response = app
        .client()
        .post("/upload")
        .multipart(video_form("holiday.mp4", &bytes, "video/mp4"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: UploadResponse = response.json();
    assert_eq!(body.message, "Video uploaded successfully!");
    assert_eq!(body.video_url, format!("{}/holiday.mp4", CONTAINER_URL));

    let stored: Vec<_> = app.storage.list().await.unwrap().try_collect().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "holiday.mp4");
    assert_eq!(app.storage.download("holiday.mp4").await.unwrap(), bytes);
}

#[tokio::test]
async fn test_upload_response_url_matches_stored_object() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/upload")
        .multipart(video_form("my clip.mov", b"abc", "video/quicktime"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["videoUrl"],
        app.storage.object_url("my clip.mov").as_str()
    );
    assert_eq!(body["videoUrl"], format!("{}/my%20clip.mov", CONTAINER_URL));
}

#[tokio::test]
async fn test_second_upload_with_same_name_overwrites() {
    let app = setup_test_app();

    for content in [&b"first version"[..], &b"second version"[..]] {
        let response = app
            .client()
            .post("/upload")
            .multipart(video_form("clip.mp4", content, "video/mp4"))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    assert_eq!(
        app.storage.download("clip.mp4").await.unwrap(),
        b"second version"
    );
    let stored: Vec<_> = app.storage.list().await.unwrap().try_collect().await.unwrap();
    assert_eq!(stored.len(), 1);
}

#[tokio::test]
async fn test_upload_without_file_is_rejected_before_storage() {
    let app = setup_app_with(ScriptedStorage::new(CONTAINER_URL));

    let form = MultipartForm::new().add_text("title", "no video here");
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No file uploaded.");
    assert_eq!(app.storage.upload_calls(), 0);
}

#[tokio::test]
async fn test_upload_with_non_multipart_body_is_rejected() {
    let app = setup_app_with(ScriptedStorage::new(CONTAINER_URL));

    let response = app
        .client()
        .post("/upload")
        .json(&serde_json::json!({ "video": "not a file" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No file uploaded.");
    assert_eq!(app.storage.upload_calls(), 0);
}

#[tokio::test]
async fn test_video_field_without_filename_is_not_a_file() {
    let app = setup_app_with(ScriptedStorage::new(CONTAINER_URL));

    let form = MultipartForm::new().add_text("video", "just text");
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.storage.upload_calls(), 0);
}

#[tokio::test]
async fn test_file_in_other_field_is_ignored() {
    let app = setup_app_with(ScriptedStorage::new(CONTAINER_URL));

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"data".to_vec())
            .file_name("clip.mp4")
            .mime_type("video/mp4"),
    );
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.storage.upload_calls(), 0);
}

#[tokio::test]
async fn test_two_video_files_are_rejected() {
    let app = setup_app_with(ScriptedStorage::new(CONTAINER_URL));

    let form = video_form("a.mp4", b"a", "video/mp4").add_part(
        "video",
        Part::bytes(b"b".to_vec())
            .file_name("b.mp4")
            .mime_type("video/mp4"),
    );
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.storage.upload_calls(), 0);
}

#[tokio::test]
async fn test_extra_text_fields_do_not_block_upload() {
    let app = setup_test_app();

    let form = video_form("clip.webm", b"webm", "video/webm").add_text("description", "beach");
    let response = app.client().post("/upload").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(app.storage.download("clip.webm").await.unwrap(), b"webm");
}

#[tokio::test]
async fn test_large_upload_is_not_capped() {
    let app = setup_test_app();
    // Larger than axum's 2 MB default body limit.
    let bytes = vec![7u8; 3 * 1024 * 1024];

    let response = app
        .client()
        .post("/upload")
        .multipart(video_form("big.mp4", &bytes, "video/mp4"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(app.storage.download("big.mp4").await.unwrap().len(), bytes.len());
}

#[tokio::test]
async fn test_filename_with_separators_is_stored_as_nested_name() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/upload")
        .multipart(video_form("trips/2024/clip.mp4", b"x", "video/mp4"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        app.storage.download("trips/2024/clip.mp4").await.unwrap(),
        b"x"
    );
}

#[tokio::test]
async fn test_storage_failure_returns_500_and_persists_nothing() {
    let app = setup_app_with(ScriptedStorage::new(CONTAINER_URL).failing_uploads());

    let response = app
        .client()
        .post("/upload")
        .multipart(video_form("clip.mp4", b"data", "video/mp4"))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Error uploading video.");
    assert!(!response.text().contains("simulated"));
    assert_eq!(app.storage.upload_calls(), 1);

    let stored: Vec<_> = app.storage.inner.list().await.unwrap().try_collect().await.unwrap();
    assert!(stored.is_empty());
}

#[tokio::test]
async fn test_server_keeps_serving_after_a_failed_upload() {
    let app = setup_app_with(ScriptedStorage::new(CONTAINER_URL).failing_uploads());

    let failed = app
        .client()
        .post("/upload")
        .multipart(video_form("clip.mp4", b"data", "video/mp4"))
        .await;
    assert_eq!(failed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let listed = app.client().get("/getVideos").await;
    assert_eq!(listed.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_declared_content_type_reaches_storage() {
    let app = setup_app_with(ScriptedStorage::new(CONTAINER_URL));

    let response = app
        .client()
        .post("/upload")
        .multipart(video_form("clip.mov", b"moov", "video/quicktime"))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        app.storage.recorded_uploads(),
        vec![("clip.mov".to_string(), "video/quicktime".to_string())]
    );
}

#[tokio::test]
async fn test_part_without_content_type_is_stored_as_octet_stream() {
    let app = setup_app_with(ScriptedStorage::new(CONTAINER_URL));
    let body = concat!(
        "--BOUNDARY\r\n",
        "Content-Disposition: form-data; name=\"video\"; filename=\"raw.mp4\"\r\n",
        "\r\n",
        "frames\r\n",
        "--BOUNDARY--\r\n",
    );

    let response = app
        .client()
        .post("/upload")
        .content_type("multipart/form-data; boundary=BOUNDARY")
        .bytes(Bytes::from_static(body.as_bytes()))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        app.storage.recorded_uploads(),
        vec![("raw.mp4".to_string(), "application/octet-stream".to_string())]
    );
    assert_eq!(app.storage.download("raw.mp4").await.unwrap(), b"frames");
}

#[tokio::test]
async fn test_filename_with_reserved_characters_is_stored_verbatim() {
    let app = setup_test_app();

    for filename in ["clip [1080p].mp4", "#1.mp4", "100% real.mov"] {
        let response = app
            .client()
            .post("/upload")
            .multipart(video_form(filename, filename.as_bytes(), "video/mp4"))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: UploadResponse = response.json();
        assert_eq!(body.video_url, app.storage.object_url(filename));
        assert_eq!(
            app.storage.download(filename).await.unwrap(),
            filename.as_bytes()
        );
    }

    let mut stored: Vec<_> = app
        .storage
        .list()
        .await
        .unwrap()
        .map_ok(|object| object.name)
        .try_collect()
        .await
        .unwrap();
    stored.sort();
    assert_eq!(stored, vec!["#1.mp4", "100% real.mov", "clip [1080p].mp4"]);
}

#[tokio::test]
async fn test_unstorable_filename_is_an_upload_failure() {
    let app = setup_test_app();

    let response = app
        .client()
        .post("/upload")
        .multipart(video_form("../escape.mp4", b"x", "video/mp4"))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Error uploading video.");
    let stored: Vec<_> = app.storage.list().await.unwrap().try_collect().await.unwrap();
    assert!(stored.is_empty());
}

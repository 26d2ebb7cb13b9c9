//! Test helpers: build the router over an in-memory or scripted storage.
//!
//! Run from workspace root: `cargo test -p vidrelay-api`.

pub mod storage;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use std::sync::Arc;
use vidrelay_api::setup::routes;
use vidrelay_api::AppState;
use vidrelay_storage::{InMemoryStorage, Storage};

pub use storage::{ListFailure, ScriptedStorage};

/// Container URL used by every test backend.
pub const CONTAINER_URL: &str = "http://127.0.0.1:10000/devstoreaccount1/new";

/// Test application: server plus a handle on the storage behind it.
pub struct TestApp<S> {
    pub server: TestServer,
    pub storage: Arc<S>,
}

impl<S> TestApp<S> {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn setup_app_with<S: Storage + 'static>(storage: S) -> TestApp<S> {
    let storage = Arc::new(storage);
    let state = Arc::new(AppState::new(storage.clone()));
    let server = TestServer::new(routes::setup_routes(state)).expect("Failed to build test server");
    TestApp { server, storage }
}

/// App backed by a fresh in-memory store.
pub fn setup_test_app() -> TestApp<InMemoryStorage> {
    setup_app_with(InMemoryStorage::new(CONTAINER_URL))
}

/// Multipart form with a single `video` file.
pub fn video_form(filename: &str, bytes: &[u8], mime_type: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "video",
        Part::bytes(bytes.to_vec())
            .file_name(filename.to_string())
            .mime_type(mime_type.to_string()),
    )
}

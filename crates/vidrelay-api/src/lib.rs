//! Vidrelay API Library
//!
//! HTTP handlers, error rendering and application setup for the upload relay.

mod handlers;
mod telemetry;
mod utils;

pub mod error;
pub mod models;
pub mod setup;
pub mod state;

pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;

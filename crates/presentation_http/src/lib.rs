//! Zipcast HTTP presentation layer
//!
//! This crate provides the HTTP API for Zipcast.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{cors_layer, create_router};
pub use state::AppState;

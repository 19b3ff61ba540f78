//! Route definitions

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::{delete, get},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Weather API
        .route("/weather", get(handlers::weather::get_weather))
        .route("/weather/cache", delete(handlers::weather::clear_cache))
        // Attach state
        .with_state(state)
}

/// Build the CORS layer for the configured origins
///
/// An empty list allows any origin.
pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    if allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::DELETE])
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| {
            origin
                .parse()
                .inspect_err(|e| warn!(%origin, error = %e, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::DELETE])
        .allow_headers(Any)
}

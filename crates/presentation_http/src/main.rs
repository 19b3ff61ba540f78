//! Zipcast HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use anyhow::Context;
use application::WeatherService;
use infrastructure::{AppConfig, GeocodingAdapter, WeatherAdapter, init_telemetry};
use presentation_http::{cors_layer, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_telemetry(&config.telemetry)?;

    info!("Zipcast v{} starting...", env!("CARGO_PKG_VERSION"));

    config.validate()?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        cache_ttl_secs = config.cache.ttl_secs,
        cache_max_entries = config.cache.max_entries,
        "Configuration loaded"
    );

    // Wire adapters into the service
    let resolver = GeocodingAdapter::with_config(config.geocoding.to_geocoding_config())?;
    let weather = WeatherAdapter::with_config(config.weather.to_weather_config(&config.cache))?;
    let weather_service = WeatherService::new(Arc::new(resolver), Arc::new(weather));

    let state = AppState::new(weather_service);

    // Build router (first layer added = outermost)
    let app = routes::create_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.server.allowed_origins)),
    );

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

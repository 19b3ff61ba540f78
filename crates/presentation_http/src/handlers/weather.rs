//! Weather lookup handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use domain::Weather;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{error::ApiError, state::AppState};

/// Query string for a weather lookup
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    /// Free-text address
    pub address: Option<String>,
}

/// Look up current weather and today's forecast for an address
#[instrument(skip(state))]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<Weather>, ApiError> {
    let Some(address) = query.address.filter(|a| !a.trim().is_empty()) else {
        return Err(ApiError::BadRequest(
            "Address parameter is required".to_string(),
        ));
    };

    let weather = state.weather_service.weather_for_address(&address).await?;
    debug!(from_cache = weather.from_cache, "Serving weather");
    Ok(Json(weather))
}

/// Drop all cached weather snapshots
#[instrument(skip(state))]
pub async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.weather_service.clear_cache();
    StatusCode::NO_CONTENT
}

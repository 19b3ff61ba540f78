//! WeatherAPI forecast client
//!
//! Checks the postal-code cache before calling the forecast endpoint and
//! populates it after a successful fetch.

use std::time::Duration;

use async_trait::async_trait;
use domain::{Location, Weather};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{
    cache::WeatherCache,
    config::WeatherApiConfig,
    error::WeatherError,
    models::{ForecastResponse, parse_error_envelope},
};

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions and today's forecast for a location
    ///
    /// Served from cache when the location's postal code has a live entry.
    async fn fetch(&self, location: &Location) -> Result<Weather, WeatherError>;

    /// Drop all cached snapshots
    fn clear_cache(&self);
}

/// WeatherAPI HTTP client with an attached postal-code cache
#[derive(Debug)]
pub struct WeatherApiClient {
    client: Client,
    config: WeatherApiConfig,
    cache: WeatherCache,
}

impl WeatherApiClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self::with_client(client, config))
    }

    /// Create a client sharing an existing HTTP client
    #[must_use]
    pub fn with_client(client: Client, config: WeatherApiConfig) -> Self {
        let cache = WeatherCache::new(config.cache_ttl(), config.cache_capacity);
        Self {
            client,
            config,
            cache,
        }
    }

    /// The cache backing this client
    #[must_use]
    pub const fn cache(&self) -> &WeatherCache {
        &self.cache
    }

    async fn fetch_remote(&self, location: &Location) -> Result<Weather, WeatherError> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", location.coordinates_query().as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if let Some((kind, message)) = parse_error_envelope(&body) {
            warn!(
                status = status.as_u16(),
                kind = kind.as_str(),
                %message,
                "Forecast service rejected request"
            );
            return Err(WeatherError::Rejected { kind, message });
        }

        if !status.is_success() {
            warn!(status = status.as_u16(), "Forecast service returned error status");
            return Err(WeatherError::HttpStatus {
                status: status.as_u16(),
            });
        }

        if body.trim().is_empty() {
            return Err(WeatherError::EmptyResponse);
        }

        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::ParseError(e.to_string()))?;

        parsed.into_weather(location.clone())
    }
}

#[async_trait]
impl WeatherClient for WeatherApiClient {
    #[instrument(skip(self, location), fields(zip_code = location.zip_code()))]
    async fn fetch(&self, location: &Location) -> Result<Weather, WeatherError> {
        if let Some(cached) = self.cache.get(location.zip_code()).await {
            debug!("Weather cache hit");
            return Ok(cached.mark_from_cache());
        }

        debug!("Weather cache miss, fetching forecast");
        let weather = self.fetch_remote(location).await?;
        self.cache
            .put(location.zip_code(), weather.clone())
            .await;

        debug!(
            temperature_c = weather.current.temperature_c,
            condition = %weather.current.condition.text,
            "Fetched weather"
        );
        Ok(weather)
    }

    fn clear_cache(&self) {
        debug!("Clearing weather cache");
        self.cache.clear();
    }
}

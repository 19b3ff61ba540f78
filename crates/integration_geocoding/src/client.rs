//! Google Geocoding client

use std::time::Duration;

use async_trait::async_trait;
use domain::{Address, Location};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{
    config::GeocodingConfig,
    error::GeocodingError,
    models::{GeocodeResponse, STATUS_OK},
};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve an address to its best-matching location
    async fn geocode(&self, address: &Address) -> Result<Location, GeocodingError>;
}

/// Client for the Google Geocoding API
#[derive(Debug)]
pub struct GoogleGeocodingClient {
    client: Client,
    config: GeocodingConfig,
}

impl GoogleGeocodingClient {
    /// Create a new client with its own HTTP connection pool
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self::with_client(client, config))
    }

    /// Create a client sharing an existing HTTP client
    #[must_use]
    pub const fn with_client(client: Client, config: GeocodingConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl GeocodingClient for GoogleGeocodingClient {
    #[instrument(skip(self, address), fields(address = %address))]
    async fn geocode(&self, address: &Address) -> Result<Location, GeocodingError> {
        debug!("Geocoding address");

        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("address", address.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Geocoding service returned error status");
            return Err(GeocodingError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let location = extract_location(parsed, address.as_str())?;
        debug!(
            zip_code = location.zip_code(),
            latitude = location.latitude(),
            longitude = location.longitude(),
            "Geocoded address"
        );
        Ok(location)
    }
}

/// Build a location from the first result of a successful response
fn extract_location(response: GeocodeResponse, address: &str) -> Result<Location, GeocodingError> {
    if response.status != STATUS_OK {
        debug!(
            status = %response.status,
            error_message = response.error_message.as_deref().unwrap_or_default(),
            "Geocoding lookup unsuccessful"
        );
        return Err(GeocodingError::NotFound(address.to_string()));
    }

    let result = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| GeocodingError::NotFound(address.to_string()))?;

    let Some(zip_code) = result.postal_code().map(str::to_string) else {
        debug!("First geocoding result has no postal code");
        return Err(GeocodingError::NotFound(address.to_string()));
    };

    Ok(Location::new(
        result.formatted_address,
        zip_code,
        result.geometry.location.lat,
        result.geometry.location.lng,
    ))
}

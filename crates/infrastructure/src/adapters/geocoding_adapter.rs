//! Geocoding adapter - Implements AddressResolverPort using integration_geocoding

use application::{error::ApplicationError, ports::AddressResolverPort};
use async_trait::async_trait;
use domain::{Address, Location};
use integration_geocoding::{
    GeocodingClient, GeocodingConfig, GeocodingError, GoogleGeocodingClient,
};
use tracing::{debug, instrument};

/// Adapter for address resolution using the Google Geocoding API
#[derive(Debug)]
pub struct GeocodingAdapter {
    client: GoogleGeocodingClient,
}

impl GeocodingAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = GoogleGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn with_client(client: GoogleGeocodingClient) -> Self {
        Self { client }
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::NotFound(address) => ApplicationError::NotFound(address),
            GeocodingError::HttpStatus { status } => ApplicationError::UpstreamStatus(status),
            e @ (GeocodingError::ConnectionFailed(_)
            | GeocodingError::RequestFailed(_)
            | GeocodingError::Timeout
            | GeocodingError::ParseError(_)) => ApplicationError::ExternalService(e.to_string()),
        }
    }
}

#[async_trait]
impl AddressResolverPort for GeocodingAdapter {
    #[instrument(skip(self, address), fields(address = %address))]
    async fn resolve(&self, address: &Address) -> Result<Location, ApplicationError> {
        let result = self.client.geocode(address).await.map_err(Self::map_error);

        match &result {
            Ok(location) => {
                debug!(zip_code = location.zip_code(), "Resolved address");
            },
            Err(e) => {
                debug!(error = %e, "Failed to resolve address");
            },
        }

        result
    }
}

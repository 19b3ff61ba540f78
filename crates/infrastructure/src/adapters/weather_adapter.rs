//! Weather adapter - Implements WeatherPort using integration_weather

use application::{error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use domain::{Location, Weather};
use integration_weather::{WeatherApiClient, WeatherApiConfig, WeatherClient, WeatherError};
use tracing::{debug, instrument};

/// Adapter for weather lookups using the WeatherAPI forecast endpoint
#[derive(Debug)]
pub struct WeatherAdapter {
    client: WeatherApiClient,
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherApiConfig) -> Result<Self, ApplicationError> {
        let client =
            WeatherApiClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing client
    #[must_use]
    pub const fn with_client(client: WeatherApiClient) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::Rejected { kind, message } => {
                ApplicationError::UpstreamRejected { kind, message }
            },
            WeatherError::HttpStatus { status } => ApplicationError::UpstreamStatus(status),
            e @ (WeatherError::EmptyResponse
            | WeatherError::ConnectionFailed(_)
            | WeatherError::RequestFailed(_)
            | WeatherError::Timeout
            | WeatherError::ParseError(_)
            | WeatherError::MissingForecastDay) => {
                ApplicationError::ExternalService(e.to_string())
            },
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self, location), fields(zip_code = location.zip_code()))]
    async fn fetch_weather(&self, location: &Location) -> Result<Weather, ApplicationError> {
        let result = self.client.fetch(location).await.map_err(Self::map_error);

        match &result {
            Ok(weather) => {
                debug!(
                    temperature_c = weather.current.temperature_c,
                    from_cache = weather.from_cache,
                    "Retrieved weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather");
            },
        }

        result
    }

    fn clear_cache(&self) {
        self.client.clear_cache();
    }
}

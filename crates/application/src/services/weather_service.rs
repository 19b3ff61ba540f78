//! Weather lookup service
//!
//! Chains address validation, geocoding and forecast retrieval.

use std::{fmt, sync::Arc};

use domain::{Address, Weather};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::{AddressResolverPort, WeatherPort},
};

/// Service answering "what is the weather at this address?"
pub struct WeatherService {
    resolver: Arc<dyn AddressResolverPort>,
    weather_port: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a new weather service
    pub fn new(resolver: Arc<dyn AddressResolverPort>, weather_port: Arc<dyn WeatherPort>) -> Self {
        Self {
            resolver,
            weather_port,
        }
    }

    /// Look up weather for a free-text address
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Domain`] for a blank address and
    /// propagates resolver and weather port failures unchanged.
    #[instrument(skip(self))]
    pub async fn weather_for_address(&self, address: &str) -> Result<Weather, ApplicationError> {
        let address = Address::new(address)?;

        let location = self.resolver.resolve(&address).await?;
        debug!(
            zip_code = location.zip_code(),
            formatted_address = location.formatted_address(),
            "Resolved address"
        );

        let weather = self.weather_port.fetch_weather(&location).await?;
        info!(
            zip_code = location.zip_code(),
            from_cache = weather.from_cache,
            "Weather lookup complete"
        );
        Ok(weather)
    }

    /// Drop all cached weather snapshots
    #[instrument(skip(self))]
    pub fn clear_cache(&self) {
        info!("Clearing weather cache");
        self.weather_port.clear_cache();
    }
}

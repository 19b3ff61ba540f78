//! Weather service port
//!
//! Defines the interface for weather data retrieval.

use async_trait::async_trait;
use domain::{Location, Weather};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions and today's forecast for a location
    ///
    /// Implementations may serve from a cache keyed by the location's postal
    /// code, in which case the returned snapshot has `from_cache` set.
    async fn fetch_weather(&self, location: &Location) -> Result<Weather, ApplicationError>;

    /// Drop all cached snapshots
    fn clear_cache(&self);
}

//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `integrations`: Geocoding and forecast services
//! - `cache`: Weather cache bounds
//! - `telemetry`: Log filter and format
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml` in the working directory, and `ZIPCAST_*` environment
//! variables using `__` between nested keys (e.g. `ZIPCAST_WEATHER__API_KEY`).

mod cache;
mod integrations;
mod server;
mod telemetry;

use application::ApplicationError;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

pub use cache::CacheConfig;
pub use integrations::{GeocodingAppConfig, WeatherAppConfig};
pub use server::ServerConfig;
pub use telemetry::TelemetryAppConfig;

/// Environment variable prefix
const ENV_PREFIX: &str = "ZIPCAST";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Geocoding configuration
    #[serde(default)]
    pub geocoding: GeocodingAppConfig,

    /// Forecast configuration
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(
            config::File::with_name("config").required(false),
            Self::environment(),
        )
    }

    /// Environment variable source (e.g., `ZIPCAST_SERVER__PORT=8081`)
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("server.allowed_origins")
            .try_parsing(true)
    }

    fn load_from<F>(file: F, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(file)
            .add_source(env)
            .build()?;

        config.try_deserialize()
    }

    /// Check that the configuration can serve requests
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] naming the first problem found.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let invalid = |msg: &str| Err(ApplicationError::Configuration(msg.to_string()));

        if self.geocoding.api_key.expose_secret().trim().is_empty() {
            return invalid("geocoding.api_key is required");
        }
        if self.weather.api_key.expose_secret().trim().is_empty() {
            return invalid("weather.api_key is required");
        }
        if self.geocoding.base_url.trim().is_empty() {
            return invalid("geocoding.base_url must not be empty");
        }
        if self.weather.base_url.trim().is_empty() {
            return invalid("weather.base_url must not be empty");
        }
        if self.cache.ttl_secs == 0 {
            return invalid("cache.ttl_secs must be greater than zero");
        }
        if self.cache.ttl() > integration_weather::MAX_CACHE_TTL {
            return invalid("cache.ttl_secs must not exceed one year");
        }
        if self.cache.max_entries == 0 {
            return invalid("cache.max_entries must be greater than zero");
        }
        Ok(())
    }
}

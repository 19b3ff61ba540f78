//! Forecast service configuration

use std::{fmt, time::Duration};

use serde::Deserialize;

/// Weather service configuration
#[derive(Clone, Deserialize)]
pub struct WeatherApiConfig {
    /// Forecast endpoint URL (default: <https://api.weatherapi.com/v1/forecast.json>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `key` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Cache time-to-live in seconds, counted from insertion (default: 1800)
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,

    /// Maximum number of cached postal codes (default: 1000)
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1/forecast.json".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_cache_ttl() -> u64 {
    1800
}

const fn default_cache_capacity() -> u64 {
    1000
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
            cache_ttl_secs: default_cache_ttl(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl WeatherApiConfig {
    /// Create a configuration for the public endpoint with the given key
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Cache TTL as a [`Duration`]
    #[must_use]
    pub const fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl fmt::Debug for WeatherApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .field("cache_capacity", &self.cache_capacity)
            .finish()
    }
}

//! Geocoding and forecast service configuration.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::CacheConfig;

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

// ==============================
// Geocoding Configuration
// ==============================

/// Google Geocoding configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// Geocoding endpoint URL
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default = "empty_secret", skip_serializing)]
    pub api_key: SecretString,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_geocoding_base_url() -> String {
    "https://maps.googleapis.com/maps/api/geocode/json".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            api_key: empty_secret(),
            timeout_secs: default_timeout(),
        }
    }
}

impl std::fmt::Debug for GeocodingAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeocodingAppConfig {
    /// Convert to `integration_geocoding`'s `GeocodingConfig`
    #[must_use]
    pub fn to_geocoding_config(&self) -> integration_geocoding::GeocodingConfig {
        integration_geocoding::GeocodingConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.expose_secret().to_string(),
            timeout_secs: self.timeout_secs,
        }
    }
}

// ==============================
// Weather Configuration
// ==============================

/// WeatherAPI forecast configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// Forecast endpoint URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(default = "empty_secret", skip_serializing)]
    pub api_key: SecretString,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    "https://api.weatherapi.com/v1/forecast.json".to_string()
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: empty_secret(),
            timeout_secs: default_timeout(),
        }
    }
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl WeatherAppConfig {
    /// Convert to `integration_weather`'s `WeatherApiConfig`, applying cache bounds
    #[must_use]
    pub fn to_weather_config(&self, cache: &CacheConfig) -> integration_weather::WeatherApiConfig {
        integration_weather::WeatherApiConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.expose_secret().to_string(),
            timeout_secs: self.timeout_secs,
            cache_ttl_secs: cache.ttl_secs,
            cache_capacity: cache.max_entries,
        }
    }
}

//! Weather snapshot returned by the lookup pipeline

use serde::{Deserialize, Serialize};

use super::Location;

/// Textual and coded description of the sky
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Condition {
    /// Description such as "Sunny" or "Partly cloudy"
    pub text: String,
    /// Icon URL or path
    pub icon: String,
    /// Upstream condition code
    pub code: i32,
}

/// Current conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Current {
    /// Seconds since the Unix epoch of the last upstream update
    pub last_updated_epoch: i64,
    /// Temperature in Celsius
    #[serde(rename = "temp_c")]
    pub temperature_c: f64,
    /// Temperature in Fahrenheit
    #[serde(rename = "temp_f")]
    pub temperature_f: f64,
    pub condition: Condition,
}

/// Today's forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(rename = "mintemp_c")]
    pub min_temp_c: f64,
    #[serde(rename = "mintemp_f")]
    pub min_temp_f: f64,
    #[serde(rename = "maxtemp_c")]
    pub max_temp_c: f64,
    #[serde(rename = "maxtemp_f")]
    pub max_temp_f: f64,
    pub condition: Condition,
}

/// Weather for a location, tagged with whether it was served from cache
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub location: Location,
    pub current: Current,
    pub forecast: Forecast,
    /// Set on the copy handed to a cache-hit caller, never on a stored entry
    pub from_cache: bool,
}

impl Weather {
    /// Create a freshly fetched snapshot
    #[must_use]
    pub const fn new(location: Location, current: Current, forecast: Forecast) -> Self {
        Self {
            location,
            current,
            forecast,
            from_cache: false,
        }
    }

    /// Tag this copy as served from cache
    #[must_use]
    pub fn mark_from_cache(mut self) -> Self {
        self.from_cache = true;
        self
    }
}

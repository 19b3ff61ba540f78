//! Geocoded location

use serde::{Deserialize, Serialize};

/// A geocoded address with coordinates and the postal code used as cache key
///
/// Constructed by the address resolver and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    formatted_address: String,
    zip_code: String,
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(
        formatted_address: impl Into<String>,
        zip_code: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            formatted_address: formatted_address.into(),
            zip_code: zip_code.into(),
            latitude,
            longitude,
        }
    }

    /// Full address as formatted by the geocoding service
    pub fn formatted_address(&self) -> &str {
        &self.formatted_address
    }

    /// Postal code of the location
    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    /// Latitude in decimal degrees
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Coordinates as the `lat,lng` pair expected by the forecast service
    #[must_use]
    pub fn coordinates_query(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

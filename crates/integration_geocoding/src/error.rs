//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// No usable match: bad status, empty results, or no postal code
    #[error("Address not found: {0}")]
    NotFound(String),

    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Geocoding service answered with a non-success HTTP status
    #[error("Geocoding service returned HTTP {status}")]
    HttpStatus {
        /// The HTTP status code
        status: u16,
    },

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for GeocodingError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout;
        }
        // The request URL carries the API key.
        let err = err.without_url();
        if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

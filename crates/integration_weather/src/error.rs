//! Weather client errors

use domain::ForecastErrorKind;
use thiserror::Error;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The forecast service answered with its error envelope
    #[error("{kind}: {message}")]
    Rejected {
        /// Classification of the upstream error code
        kind: ForecastErrorKind,
        /// Message as sent by the forecast service
        message: String,
    },

    /// The forecast service answered with an empty body
    #[error("Empty response from forecast service")]
    EmptyResponse,

    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Non-success HTTP status without a recognizable error envelope
    #[error("Forecast service returned HTTP {status}")]
    HttpStatus {
        /// The HTTP status code
        status: u16,
    },

    /// Request timeout
    #[error("Forecast request timed out")]
    Timeout,

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The response carried no forecast day
    #[error("Forecast response contains no forecast day")]
    MissingForecastDay,
}

impl From<reqwest::Error> for WeatherError {
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

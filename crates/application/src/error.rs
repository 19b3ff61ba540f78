//! Application-level errors

use domain::{DomainError, ForecastErrorKind};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The address could not be resolved to a location with a postal code
    #[error("Not found: {0}")]
    NotFound(String),

    /// The forecast service rejected the request with a classified error
    #[error("Upstream rejected request: {kind}: {message}")]
    UpstreamRejected {
        /// Classification of the upstream error code
        kind: ForecastErrorKind,
        /// Message as sent by the upstream service
        message: String,
    },

    /// An upstream service answered with an explicit HTTP error status
    #[error("Upstream returned HTTP {0}")]
    UpstreamStatus(u16),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

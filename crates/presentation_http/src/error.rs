//! API error handling
//!
//! Translates application failures into HTTP status codes and a uniform
//! JSON error body.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::ForecastErrorKind;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Classified forecast-service failure surfaced with its own code
    #[error("Upstream error ({}): {message}", .kind.as_str())]
    Upstream {
        status: StatusCode,
        kind: ForecastErrorKind,
        message: String,
    },

    /// An upstream service rejected the request with this 4xx status
    #[error("Upstream returned {0}")]
    UpstreamStatus(StatusCode),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Status code sent for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream { status, .. } | Self::UpstreamStatus(status) => *status,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "bad_request",
            Self::NotFound(_) => "not_found",
            Self::Upstream { kind, .. } => kind.as_str(),
            Self::UpstreamStatus(_) => "upstream_status",
            Self::ServiceUnavailable(_) => "service_unavailable",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let (message, details) = match self {
            Self::BadRequest(msg) | Self::NotFound(msg) | Self::ServiceUnavailable(msg) => {
                (msg, None)
            },
            Self::Upstream { message, .. } => (message, None),
            Self::UpstreamStatus(upstream) => {
                (format!("Upstream service returned {upstream}"), None)
            },
            Self::Internal(msg) => ("An internal error occurred".to_string(), Some(msg)),
        };

        if status.is_server_error() {
            error!(%status, code, %message, "Request failed");
        } else {
            warn!(%status, code, %message, "Request rejected");
        }

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::NotFound(address) => {
                Self::NotFound(format!("Location not found for address: {address}"))
            },
            ApplicationError::UpstreamRejected { kind, message } => Self::Upstream {
                status: rejection_status(kind),
                kind,
                message,
            },
            ApplicationError::UpstreamStatus(status) => match StatusCode::from_u16(status) {
                Ok(code) if code.is_client_error() => Self::UpstreamStatus(code),
                _ => Self::ServiceUnavailable(format!("Upstream service returned {status}")),
            },
            ApplicationError::ExternalService(msg) => Self::ServiceUnavailable(msg),
            ApplicationError::Configuration(msg) | ApplicationError::Internal(msg) => {
                Self::Internal(msg)
            },
        }
    }
}

/// Status for a classified forecast-service rejection
const fn rejection_status(kind: ForecastErrorKind) -> StatusCode {
    match kind {
        ForecastErrorKind::LocationNotFound => StatusCode::NOT_FOUND,
        ForecastErrorKind::InternalUpstreamError | ForecastErrorKind::Generic => {
            StatusCode::SERVICE_UNAVAILABLE
        },
        ForecastErrorKind::MissingApiKey
        | ForecastErrorKind::MissingQueryParameter
        | ForecastErrorKind::InvalidRequestUrl
        | ForecastErrorKind::InvalidBulkJson
        | ForecastErrorKind::TooManyBulkLocations
        | ForecastErrorKind::InvalidApiKey
        | ForecastErrorKind::QuotaExceeded
        | ForecastErrorKind::ApiKeyDisabled
        | ForecastErrorKind::ApiKeyForbidden => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

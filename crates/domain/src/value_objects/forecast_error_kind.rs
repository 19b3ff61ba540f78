//! Classification of forecast-service error envelopes
//!
//! The forecast service reports failures as a `{code, message}` pair. Each
//! known code maps to exactly one kind; anything else is `Generic`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of failure reported by the forecast service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastErrorKind {
    /// 1002
    MissingApiKey,
    /// 1003
    MissingQueryParameter,
    /// 1005
    InvalidRequestUrl,
    /// 1006
    LocationNotFound,
    /// 9000
    InvalidBulkJson,
    /// 9001
    TooManyBulkLocations,
    /// 9999
    InternalUpstreamError,
    /// 2006
    InvalidApiKey,
    /// 2007
    QuotaExceeded,
    /// 2008
    ApiKeyDisabled,
    /// 2009
    ApiKeyForbidden,
    /// Any code not listed above
    Generic,
}

impl ForecastErrorKind {
    /// Classify an upstream error code
    ///
    /// Surrounding whitespace is ignored; unknown codes yield `Generic`.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1002" => Self::MissingApiKey,
            "1003" => Self::MissingQueryParameter,
            "1005" => Self::InvalidRequestUrl,
            "1006" => Self::LocationNotFound,
            "9000" => Self::InvalidBulkJson,
            "9001" => Self::TooManyBulkLocations,
            "9999" => Self::InternalUpstreamError,
            "2006" => Self::InvalidApiKey,
            "2007" => Self::QuotaExceeded,
            "2008" => Self::ApiKeyDisabled,
            "2009" => Self::ApiKeyForbidden,
            _ => Self::Generic,
        }
    }

    /// Human-readable label for the failure
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "API key not provided",
            Self::MissingQueryParameter => "Parameter 'q' not provided",
            Self::InvalidRequestUrl => "API request URL is invalid",
            Self::LocationNotFound => "No location found matching parameter 'q'",
            Self::InvalidBulkJson => "Invalid JSON body in bulk request",
            Self::TooManyBulkLocations => "Too many locations in bulk request",
            Self::InternalUpstreamError => "Internal application error",
            Self::InvalidApiKey => "API key is invalid",
            Self::QuotaExceeded => "API key has exceeded calls per month quota",
            Self::ApiKeyDisabled => "API key has been disabled",
            Self::ApiKeyForbidden => "API key does not have access to the resource",
            Self::Generic => "API error",
        }
    }

    /// Stable machine-readable name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "missing_api_key",
            Self::MissingQueryParameter => "missing_query_parameter",
            Self::InvalidRequestUrl => "invalid_request_url",
            Self::LocationNotFound => "location_not_found",
            Self::InvalidBulkJson => "invalid_bulk_json",
            Self::TooManyBulkLocations => "too_many_bulk_locations",
            Self::InternalUpstreamError => "internal_upstream_error",
            Self::InvalidApiKey => "invalid_api_key",
            Self::QuotaExceeded => "quota_exceeded",
            Self::ApiKeyDisabled => "api_key_disabled",
            Self::ApiKeyForbidden => "api_key_forbidden",
            Self::Generic => "generic_upstream_error",
        }
    }
}

impl fmt::Display for ForecastErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

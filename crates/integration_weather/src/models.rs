//! WeatherAPI response types
//!
//! Raw shapes of the forecast endpoint, converted into domain types.

use domain::{Condition, Current, Forecast, ForecastErrorKind, Location, Weather};
use serde::Deserialize;
use serde_json::Value;

use crate::error::WeatherError;

/// Successful forecast response
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub current: ApiCurrent,
    pub forecast: ApiForecast,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCurrent {
    #[serde(default)]
    pub last_updated_epoch: i64,
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiForecast {
    #[serde(default)]
    pub forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiForecastDay {
    pub day: ApiDay,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiDay {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiCondition {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub code: i32,
}

impl From<ApiCondition> for Condition {
    fn from(c: ApiCondition) -> Self {
        Self {
            text: c.text,
            icon: c.icon,
            code: c.code,
        }
    }
}

impl ForecastResponse {
    /// Convert into a fresh snapshot for `location`, using today's forecast
    pub fn into_weather(self, location: Location) -> Result<Weather, WeatherError> {
        let today = self
            .forecast
            .forecastday
            .into_iter()
            .next()
            .ok_or(WeatherError::MissingForecastDay)?
            .day;

        let current = Current {
            last_updated_epoch: self.current.last_updated_epoch,
            temperature_c: self.current.temp_c,
            temperature_f: self.current.temp_f,
            condition: self.current.condition.into(),
        };

        let forecast = Forecast {
            min_temp_c: today.mintemp_c,
            min_temp_f: today.mintemp_f,
            max_temp_c: today.maxtemp_c,
            max_temp_f: today.maxtemp_f,
            condition: today.condition.into(),
        };

        Ok(Weather::new(location, current, forecast))
    }
}

/// Detect the service's error envelope and classify it
///
/// Accepts `{"code", "message"}` at the top level or nested under `"error"`,
/// with `code` as either a string or a number. Only `code` is required: a
/// missing or non-string `message` falls back to the kind's description.
/// Returns `None` when the body is not JSON or carries no code.
pub(crate) fn parse_error_envelope(body: &str) -> Option<(ForecastErrorKind, String)> {
    let value: Value = serde_json::from_str(body).ok()?;
    let envelope = match value.get("error") {
        Some(nested) if nested.is_object() => nested,
        _ => &value,
    };

    let code = match envelope.get("code")? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    let kind = ForecastErrorKind::from_code(&code);
    let message = envelope
        .get("message")
        .and_then(Value::as_str)
        .map_or_else(|| kind.description().to_string(), str::to_string);

    Some((kind, message))
}

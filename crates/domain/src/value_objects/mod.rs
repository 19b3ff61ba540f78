//! Value Objects - Immutable, identity-less domain primitives

mod address;
mod forecast_error_kind;

pub use address::Address;
pub use forecast_error_kind::ForecastErrorKind;

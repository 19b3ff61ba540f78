//! WeatherAPI forecast integration
//!
//! Client for the [WeatherAPI](https://www.weatherapi.com) forecast endpoint.
//! Snapshots are cached per postal code for a bounded time, and the
//! service's error envelope is classified into [`domain::ForecastErrorKind`].

mod cache;
mod client;
mod config;
mod error;
mod models;

pub use cache::{MAX_CACHE_TTL, WeatherCache};
pub use client::{WeatherApiClient, WeatherClient};
pub use config::WeatherApiConfig;
pub use error::WeatherError;

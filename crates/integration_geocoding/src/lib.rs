//! Google Geocoding integration
//!
//! Resolves a free-text address into a [`domain::Location`] using the
//! [Google Geocoding API](https://developers.google.com/maps/documentation/geocoding).
//!
//! Only the first match is considered, and a match without a postal code is
//! treated as not found because the postal code keys the weather cache.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::Address;
//! use integration_geocoding::{GeocodingClient, GeocodingConfig, GoogleGeocodingClient};
//!
//! let config = GeocodingConfig::new("my-api-key");
//! let client = GoogleGeocodingClient::new(config)?;
//!
//! let location = client
//!     .geocode(&Address::new("1600 Amphitheatre Parkway, Mountain View, CA")?)
//!     .await?;
//! assert_eq!(location.zip_code(), "94043");
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, GoogleGeocodingClient};
pub use config::GeocodingConfig;
pub use error::GeocodingError;

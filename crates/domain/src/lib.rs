//! Domain layer for Zipcast
//!
//! Contains the weather data model, validated inputs and the taxonomy of
//! upstream forecast failures. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

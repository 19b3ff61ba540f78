//! Application layer - Use cases and orchestration
//!
//! Defines the ports the weather lookup depends on and the service that
//! chains address resolution and forecast retrieval.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

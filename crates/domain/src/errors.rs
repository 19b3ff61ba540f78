//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Address was empty or contained only whitespace
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

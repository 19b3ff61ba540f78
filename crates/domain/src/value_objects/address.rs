//! Free-text address value object
//!
//! Addresses are validated before any geocoding request is issued, so the
//! resolver never sees blank input.
//!
//! # Examples
//!
//! ```
//! use domain::Address;
//!
//! let address = Address::new("  1600 Amphitheatre Parkway  ").unwrap();
//! assert_eq!(address.as_str(), "1600 Amphitheatre Parkway");
//!
//! assert!(Address::new("   ").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A non-blank, trimmed address string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Create a new address, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddress` if the input is empty after trimming.
    pub fn new(address: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = address.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidAddress(
                "address must not be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Address {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

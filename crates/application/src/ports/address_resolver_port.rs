//! Address resolver port
//!
//! Defines the interface for turning a free-text address into a location.

use async_trait::async_trait;
use domain::{Address, Location};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding addresses
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AddressResolverPort: Send + Sync {
    /// Resolve an address to a location carrying a postal code
    ///
    /// Fails with [`ApplicationError::NotFound`] when the geocoder has no
    /// match or the best match has no postal code.
    async fn resolve(&self, address: &Address) -> Result<Location, ApplicationError>;
}

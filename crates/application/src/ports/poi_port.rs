//! Nearby point-of-interest lookup port
//!
//! Adapters in the infrastructure layer implement this port on top of a
//! geographic query service.

use async_trait::async_trait;
use domain::{Coordinate, Restaurant};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for looking up restaurants around a coordinate
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PoiPort: Send + Sync {
    /// Fetch restaurants within `radius_meters` of `center`
    ///
    /// Performs exactly one request. Individual malformed records are dropped
    /// by the adapter; only transport and payload failures are returned.
    async fn fetch_nearby(
        &self,
        center: Coordinate,
        radius_meters: f64,
    ) -> Result<Vec<Restaurant>, ApplicationError>;

    /// Check if the lookup service is available
    async fn is_available(&self) -> bool;
}

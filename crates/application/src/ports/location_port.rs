//! Device location port

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

/// Outcome of a single location request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationReading {
    /// The device reported a position
    Available(Coordinate),
    /// The user refused location access
    Denied,
}

impl LocationReading {
    /// The coordinate, if one was obtained
    #[must_use]
    pub const fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::Available(c) => Some(*c),
            Self::Denied => None,
        }
    }
}

/// Port for obtaining the user's current position
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LocationPort: Send + Sync {
    /// Request permission if needed and read the current position once
    async fn current_location(&self) -> LocationReading;
}

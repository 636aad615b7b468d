//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates {
        /// Rejected latitude
        latitude: f64,
        /// Rejected longitude
        longitude: f64,
    },

    /// Search radius outside the supported range
    #[error("Invalid radius: {miles} mi (must be between {min} and {max} mi)")]
    InvalidRadius {
        /// Rejected radius in miles
        miles: f64,
        /// Smallest accepted radius
        min: f64,
        /// Largest accepted radius
        max: f64,
    },
}

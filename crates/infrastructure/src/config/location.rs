//! Fixed location configuration.

use domain::Coordinate;
use serde::{Deserialize, Serialize};

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl LocationConfig {
    /// Convert to domain `Coordinate` value object
    ///
    /// Returns `None` if coordinates are invalid.
    #[must_use]
    pub fn to_coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.latitude, self.longitude).ok()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of range.
    pub fn validate(&self) -> Result<(), String> {
        Coordinate::new(self.latitude, self.longitude)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_location_converts() {
        let config = LocationConfig {
            latitude: 40.7128,
            longitude: -74.006,
        };
        assert!(config.to_coordinate().is_some());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_location_is_rejected() {
        let config = LocationConfig {
            latitude: 0.0,
            longitude: 190.0,
        };
        assert!(config.to_coordinate().is_none());
        assert!(config.validate().is_err());
    }
}

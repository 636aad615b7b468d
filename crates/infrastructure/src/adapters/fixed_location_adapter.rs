//! Fixed location adapter - Implements LocationPort from a configured reading
//!
//! Stands in for a device location service: it always answers with the same
//! coordinate, or with a denial when none was configured.

use application::ports::{LocationPort, LocationReading};
use async_trait::async_trait;
use domain::Coordinate;
use tracing::debug;

use crate::config::LocationConfig;

/// Location provider that reports a preconfigured position
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationAdapter {
    reading: LocationReading,
}

impl FixedLocationAdapter {
    /// Always report `coordinate`
    #[must_use]
    pub const fn available(coordinate: Coordinate) -> Self {
        Self {
            reading: LocationReading::Available(coordinate),
        }
    }

    /// Always report a permission denial
    #[must_use]
    pub const fn denied() -> Self {
        Self {
            reading: LocationReading::Denied,
        }
    }

    /// Build from optional configuration; a missing or invalid location is a denial
    #[must_use]
    pub fn from_config(config: Option<&LocationConfig>) -> Self {
        config
            .and_then(LocationConfig::to_coordinate)
            .map_or_else(Self::denied, Self::available)
    }
}

#[async_trait]
impl LocationPort for FixedLocationAdapter {
    async fn current_location(&self) -> LocationReading {
        debug!(reading = ?self.reading, "Reporting fixed location");
        self.reading
    }
}

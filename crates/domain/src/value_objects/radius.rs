//! Search radius value object and unit conversion

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Meters in one statute mile, as used for the search radius
pub const METERS_PER_MILE: f64 = 1609.34;

/// Convert a distance in miles to meters
#[must_use]
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * METERS_PER_MILE
}

/// Search radius in miles, always within [`RadiusMiles::MIN`, `RadiusMiles::MAX`]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RadiusMiles(f64);

impl RadiusMiles {
    /// Smallest selectable radius
    pub const MIN: f64 = 0.5;
    /// Largest selectable radius
    pub const MAX: f64 = 5.0;
    /// Slider increment
    pub const STEP: f64 = 0.5;
    /// Radius used before the user adjusts anything
    pub const DEFAULT: f64 = 1.0;

    /// Create a radius, rejecting values outside the supported range
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRadius` for non-finite values or values
    /// outside [0.5, 5.0].
    pub fn new(miles: f64) -> Result<Self, DomainError> {
        if !miles.is_finite() || !(Self::MIN..=Self::MAX).contains(&miles) {
            return Err(DomainError::InvalidRadius {
                miles,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(miles))
    }

    /// Clamp a raw slider value into range and snap it to the nearest step
    ///
    /// NaN falls back to the default radius.
    #[must_use]
    pub fn snapped(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::default();
        }
        let clamped = raw.clamp(Self::MIN, Self::MAX);
        Self((clamped / Self::STEP).round() * Self::STEP)
    }

    /// Radius in miles
    #[must_use]
    pub const fn miles(self) -> f64 {
        self.0
    }

    /// Radius in meters
    #[must_use]
    pub fn meters(self) -> f64 {
        miles_to_meters(self.0)
    }
}

impl Default for RadiusMiles {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<f64> for RadiusMiles {
    type Error = DomainError;

    fn try_from(miles: f64) -> Result<Self, Self::Error> {
        Self::new(miles)
    }
}

impl From<RadiusMiles> for f64 {
    fn from(radius: RadiusMiles) -> Self {
        radius.0
    }
}

impl fmt::Display for RadiusMiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} mi", self.0)
    }
}

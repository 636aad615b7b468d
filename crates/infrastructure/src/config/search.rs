//! Search configuration.

use application::DEFAULT_SUGGESTION_LIMIT;
use domain::{DomainError, RadiusMiles};
use serde::{Deserialize, Serialize};

/// Search behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Radius used before the user picks one, in miles (0.5 to 5.0)
    #[serde(default = "default_radius_miles")]
    pub default_radius_miles: f64,

    /// Maximum number of typeahead suggestions
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

const fn default_radius_miles() -> f64 {
    RadiusMiles::DEFAULT
}

const fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_miles: default_radius_miles(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

impl SearchConfig {
    /// Default radius as a validated value
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRadius` if the configured value is out of range.
    pub fn default_radius(&self) -> Result<RadiusMiles, DomainError> {
        RadiusMiles::new(self.default_radius_miles)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.default_radius().map_err(|e| e.to_string())?;
        if self.suggestion_limit == 0 {
            return Err("suggestion_limit must be greater than 0".to_string());
        }
        Ok(())
    }
}

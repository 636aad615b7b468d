//! Application configuration
//!
//! Split into focused sub-modules:
//! - `search`: default radius and suggestion limit
//! - `logging`: log format and level
//! - `location`: optional fixed location
//!
//! The Overpass client settings come from `integration_overpass`.

mod location;
mod logging;
mod search;

use std::path::Path;

use integration_overpass::OverpassConfig;
use serde::{Deserialize, Serialize};

pub use location::LocationConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use search::SearchConfig;

/// Prefix of environment variable overrides (e.g. `NEARBY_OVERPASS__BASE_URL`)
const ENV_PREFIX: &str = "NEARBY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Overpass API configuration
    #[serde(default)]
    pub overpass: OverpassConfig,

    /// Search behaviour
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Fixed location used in place of a device reading (optional)
    #[serde(default)]
    pub location: Option<LocationConfig>,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from a specific file, then apply environment overrides
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            .add_source(file)
            // Nested keys use a double underscore, e.g. NEARBY_SEARCH__SUGGESTION_LIMIT
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first problem found, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        self.overpass
            .validate()
            .map_err(|e| format!("overpass: {e}"))?;
        self.search.validate().map_err(|e| format!("search: {e}"))?;
        if let Some(location) = &self.location {
            location
                .validate()
                .map_err(|e| format!("location: {e}"))?;
        }
        Ok(())
    }
}

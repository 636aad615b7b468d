//! Overpass service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Overpass API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverpassConfig {
    /// Base URL of the Overpass API (the `/interpreter` endpoint is appended)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Server-side query timeout in seconds, embedded as `[timeout:N]`
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://overpass-api.de/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_query_timeout_secs() -> u64 {
    25
}

fn default_user_agent() -> String {
    format!("nearby-restaurants/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            query_timeout_secs: default_query_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl OverpassConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            query_timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Full URL of the query interpreter endpoint
    #[must_use]
    pub fn interpreter_url(&self) -> String {
        format!("{}/interpreter", self.base_url.trim_end_matches('/'))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.query_timeout_secs == 0 {
            return Err("query_timeout_secs must be greater than 0".to_string());
        }

        if self.timeout_secs < self.query_timeout_secs {
            return Err(
                "timeout_secs must not be shorter than query_timeout_secs".to_string(),
            );
        }

        Ok(())
    }
}

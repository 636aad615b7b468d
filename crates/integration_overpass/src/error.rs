//! Overpass error types

use thiserror::Error;

/// Errors that can occur while querying the Overpass API
#[derive(Debug, Error)]
pub enum OverpassError {
    /// Connection to the Overpass service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Overpass answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body was not valid JSON or lacked an `elements` array
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A single element had no usable coordinate
    #[error("Malformed element {}: {reason}", display_id(.id))]
    MalformedElement {
        /// Element id, when it could be read
        id: Option<i64>,
        /// What was wrong with the element
        reason: String,
    },

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after_secs:?} seconds")]
    RateLimitExceeded {
        /// Seconds to wait before retrying (if provided by API)
        retry_after_secs: Option<u64>,
    },

    /// Service is overloaded or temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Search radius is zero, negative or not a number
    #[error("Invalid radius: {0} m")]
    InvalidRadius(f64),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Request timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },
}

impl OverpassError {
    /// Returns true if this error came from the transport rather than the payload
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::Timeout { .. }
                | Self::RateLimitExceeded { .. }
        )
    }
}

#[allow(clippy::ref_option)] // thiserror passes fields by reference
fn display_id(id: &Option<i64>) -> String {
    id.map_or_else(|| "<unknown>".to_string(), |id| id.to_string())
}

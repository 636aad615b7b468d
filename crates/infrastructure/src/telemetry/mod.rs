//! Logging setup
//!
//! Installs a global `tracing` subscriber with an `EnvFilter` and either a
//! human-readable or a JSON formatting layer. Log lines go to stderr so that
//! command output on stdout stays clean.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Error type for logging initialization
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// Offending directive
        directive: String,
        /// Parser message
        reason: String,
    },

    /// A global subscriber was already installed
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Install the global subscriber
///
/// The filter comes from `level_override` when given (e.g. from `-v` flags),
/// then from `RUST_LOG`, then from `config.level`.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a subscriber is
/// already installed.
pub fn init_logging(
    config: &LoggingConfig,
    level_override: Option<&str>,
) -> Result<(), LoggingError> {
    let filter = build_filter(config, level_override)?;

    let (json_layer, text_layer) = match config.format {
        LogFormat::Json => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            ),
            None,
        ),
        LogFormat::Text => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::debug!(format = %config.format, "Logging initialized");
    Ok(())
}

fn build_filter(
    config: &LoggingConfig,
    level_override: Option<&str>,
) -> Result<EnvFilter, LoggingError> {
    if let Some(directive) = level_override {
        return parse_filter(directive);
    }
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    parse_filter(&config.level)
}

fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter {
        directive: directive.to_string(),
        reason: e.to_string(),
    })
}

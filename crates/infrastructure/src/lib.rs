//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the Overpass-backed
//! restaurant lookup and a fixed location provider. Also owns configuration
//! loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LocationConfig, LogFormat, LoggingConfig, SearchConfig};
pub use telemetry::{LoggingError, init_logging};

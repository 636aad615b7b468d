//! Application layer - Use cases and orchestration
//!
//! Contains the refresh controller that keeps the nearby result set in sync
//! with location and radius changes, the search filters applied to that
//! result set, and the port definitions implemented by infrastructure.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;

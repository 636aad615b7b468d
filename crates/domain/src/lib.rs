//! Domain layer for the nearby restaurant finder
//!
//! Contains the core vocabulary: coordinates, search radii and restaurant
//! records. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod radius;

pub use coordinate::Coordinate;
pub use radius::{METERS_PER_MILE, RadiusMiles, miles_to_meters};

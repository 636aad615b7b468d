//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod location_port;
mod poi_port;

#[cfg(test)]
pub use location_port::MockLocationPort;
pub use location_port::{LocationPort, LocationReading};
#[cfg(test)]
pub use poi_port::MockPoiPort;
pub use poi_port::PoiPort;

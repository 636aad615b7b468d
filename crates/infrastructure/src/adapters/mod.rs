//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod fixed_location_adapter;
mod overpass_poi_adapter;

pub use fixed_location_adapter::FixedLocationAdapter;
pub use overpass_poi_adapter::OverpassPoiAdapter;

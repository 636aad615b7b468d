//! Overpass integration for the nearby restaurant finder
//!
//! Looks up restaurants around a coordinate using the public
//! [Overpass API](https://overpass-api.de) over OpenStreetMap data.
//!
//! # Architecture
//!
//! [`build_query`] renders an Overpass QL radius query covering nodes, ways
//! and relations tagged `amenity=restaurant`. [`PoiClient`] defines the lookup
//! interface, implemented by [`OverpassClient`], which issues a single GET
//! request and normalizes each returned element into a
//! [`domain::Restaurant`]. Elements without a usable coordinate are dropped
//! without failing the batch.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain::Coordinate;
//! use integration_overpass::{OverpassClient, OverpassConfig, PoiClient};
//!
//! let client = OverpassClient::new(&OverpassConfig::default())?;
//! let center = Coordinate::new(40.7128, -74.006)?;
//! let restaurants = client.fetch_nearby(center, 1609.34).await?;
//! ```

mod client;
mod config;
mod error;
mod models;
mod query;

pub use client::{OverpassClient, PoiClient};
pub use config::OverpassConfig;
pub use error::OverpassError;
pub use models::{ElementGeometry, ElementKind, OverpassElement, parse_restaurants};
pub use query::{OverpassQuery, build_query};

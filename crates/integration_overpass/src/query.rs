//! Overpass QL query construction

use std::fmt;

use domain::Coordinate;

/// Server-side timeout used by [`build_query`]
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 25;

/// OSM element kinds a restaurant may be mapped as
const ELEMENT_KINDS: [&str; 3] = ["node", "way", "rel"];

/// A restaurant radius query around a center point
///
/// Renders (via `Display`) as Overpass QL. The center and radius are embedded
/// as plain numeric literals; transport encoding is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverpassQuery {
    center: Coordinate,
    radius_meters: f64,
    timeout_secs: u64,
}

impl OverpassQuery {
    /// Create a query with the default server-side timeout
    #[must_use]
    pub const fn new(center: Coordinate, radius_meters: f64) -> Self {
        Self {
            center,
            radius_meters,
            timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
        }
    }

    /// Override the server-side timeout
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl fmt::Display for OverpassQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let around = format!(
            "(around:{},{},{})",
            self.radius_meters,
            self.center.latitude(),
            self.center.longitude()
        );

        writeln!(f, "[out:json][timeout:{}];", self.timeout_secs)?;
        writeln!(f, "(")?;
        for kind in ELEMENT_KINDS {
            writeln!(f, "  {kind}[\"amenity\"=\"restaurant\"]{around};")?;
        }
        writeln!(f, ");")?;
        write!(f, "out center;")
    }
}

/// Build the Overpass QL text for restaurants within `radius_meters` of `center`
///
/// Covers nodes, ways and relations, and asks for centroid output so every
/// non-point result resolves to a single coordinate.
#[must_use]
pub fn build_query(center: Coordinate, radius_meters: f64) -> String {
    OverpassQuery::new(center, radius_meters).to_string()
}

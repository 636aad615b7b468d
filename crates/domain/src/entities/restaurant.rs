//! Restaurant entity

use serde::{Deserialize, Serialize};

use crate::value_objects::Coordinate;

/// A restaurant returned by a nearby search
///
/// `id` is the source element identifier. It is only unique within a single
/// fetch response, so it must not be used as a key across fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Source element identifier
    pub id: i64,

    /// Display name, [`Restaurant::UNNAMED`] when the source carries none
    pub name: String,

    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lon: f64,
}

impl Restaurant {
    /// Name used when the source element has no name tag
    pub const UNNAMED: &'static str = "Unnamed";

    /// Create a new restaurant record
    ///
    /// A missing name falls back to [`Restaurant::UNNAMED`]; an empty name
    /// tag is kept as-is.
    #[must_use]
    pub fn new(id: i64, name: Option<String>, lat: f64, lon: f64) -> Self {
        let name = name.unwrap_or_else(|| Self::UNNAMED.to_string());
        Self { id, name, lat, lon }
    }

    /// Position of the restaurant
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new_unchecked(self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_name() {
        let r = Restaurant::new(1, Some("Pizza Place".to_string()), 40.0, -73.0);
        assert_eq!(r.name, "Pizza Place");
    }

    #[test]
    fn test_new_without_name_uses_sentinel() {
        let r = Restaurant::new(2, None, 40.0, -73.0);
        assert_eq!(r.name, "Unnamed");
    }

    #[test]
    fn test_empty_name_is_kept() {
        let r = Restaurant::new(3, Some(String::new()), 40.0, -73.0);
        assert_eq!(r.name, "");
    }

    #[test]
    fn test_coordinate() {
        let r = Restaurant::new(1, None, 41.0, -74.0);
        let c = r.coordinate();
        assert!((c.latitude() - 41.0).abs() < f64::EPSILON);
        assert!((c.longitude() - -74.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serialization_shape() {
        let r = Restaurant::new(1, None, 40.0, -73.0);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Unnamed", "lat": 40.0, "lon": -73.0})
        );
    }
}

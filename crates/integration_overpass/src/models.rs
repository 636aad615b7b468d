//! Overpass response models
//!
//! Raw elements are decoded loosely, then resolved into an
//! [`OverpassElement`] whose [`ElementGeometry`] is either a direct point or
//! a centroid. Elements that resolve to neither are reported as
//! [`OverpassError::MalformedElement`] and skipped by [`parse_restaurants`].

use domain::{Coordinate, Restaurant};
use serde::Deserialize;
use tracing::{debug, trace, warn};

use crate::error::OverpassError;

/// OSM element kind as reported in the `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Single point
    Node,
    /// Polyline or area
    Way,
    /// Group of other elements
    Relation,
    /// Anything else Overpass may emit
    #[serde(other)]
    Unknown,
}

/// Where an element's coordinate came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementGeometry {
    /// The element carries its own `lat`/`lon`
    Point(Coordinate),
    /// The element is extended; `center` holds its computed centroid
    Centroid(Coordinate),
}

impl ElementGeometry {
    /// The resolved coordinate, regardless of its origin
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        match self {
            Self::Point(c) | Self::Centroid(c) => *c,
        }
    }
}

/// A response element with its geometry resolved
#[derive(Debug, Clone, PartialEq)]
pub struct OverpassElement {
    /// Element id, unique per kind within one response
    pub id: i64,
    /// Element kind, if reported
    pub kind: Option<ElementKind>,
    /// Value of the `name` tag
    pub name: Option<String>,
    /// Resolved coordinate
    pub geometry: ElementGeometry,
}

impl From<OverpassElement> for Restaurant {
    fn from(element: OverpassElement) -> Self {
        let coordinate = element.geometry.coordinate();
        Self::new(
            element.id,
            element.name,
            coordinate.latitude(),
            coordinate.longitude(),
        )
    }
}

impl TryFrom<RawElement> for OverpassElement {
    type Error = OverpassError;

    fn try_from(raw: RawElement) -> Result<Self, Self::Error> {
        let id = raw.id;
        let malformed = |reason: String| OverpassError::MalformedElement {
            id: Some(id),
            reason,
        };

        // Own lat/lon wins; an unusable center only matters when they are missing
        let point = number(raw.lat.as_ref()).zip(number(raw.lon.as_ref()));
        let centroid = raw.center.as_ref().and_then(|c| {
            number(c.get("lat")).zip(number(c.get("lon")))
        });

        let geometry = match (point, centroid) {
            (Some((lat, lon)), _) => Coordinate::new(lat, lon)
                .map(ElementGeometry::Point)
                .map_err(|e| malformed(e.to_string()))?,
            (None, Some((lat, lon))) => Coordinate::new(lat, lon)
                .map(ElementGeometry::Centroid)
                .map_err(|e| malformed(e.to_string()))?,
            (None, None) => return Err(malformed("no coordinate and no center".to_string())),
        };

        let name = raw
            .tags
            .as_ref()
            .and_then(|t| t.get("name"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_string);

        Ok(Self {
            id,
            kind: raw.kind.as_ref().and_then(decode_kind),
            name,
            geometry,
        })
    }
}

fn number(value: Option<&serde_json::Value>) -> Option<f64> {
    value.and_then(serde_json::Value::as_f64)
}

fn decode_kind(value: &serde_json::Value) -> Option<ElementKind> {
    ElementKind::deserialize(value).ok()
}

/// Parse an Overpass JSON body into restaurants
///
/// Elements that cannot be resolved are logged and dropped.
///
/// # Errors
///
/// Returns `OverpassError::ParseError` if the body is not JSON or has no
/// `elements` array.
pub fn parse_restaurants(body: &str) -> Result<Vec<Restaurant>, OverpassError> {
    let raw: RawResponse =
        serde_json::from_str(body).map_err(|e| OverpassError::ParseError(e.to_string()))?;

    if let Some(remark) = raw.remark.as_deref() {
        // Overpass reports runtime errors (e.g. query timeout) here with a 200 status
        warn!(%remark, "Overpass returned a remark, results may be incomplete");
    }

    let total = raw.elements.len();
    let restaurants: Vec<Restaurant> = raw
        .elements
        .into_iter()
        .filter_map(|value| {
            let kind = value.get("type").and_then(decode_kind);
            match resolve_element(value) {
                Ok(element) => {
                    trace!(
                        id = element.id,
                        kind = ?element.kind,
                        geometry = ?element.geometry,
                        "Resolved element"
                    );
                    Some(Restaurant::from(element))
                },
                Err(e) => {
                    warn!(error = %e, ?kind, "Dropping malformed element");
                    None
                },
            }
        })
        .collect();

    debug!(total, kept = restaurants.len(), "Parsed Overpass elements");
    Ok(restaurants)
}

/// Decode and resolve a single element
fn resolve_element(value: serde_json::Value) -> Result<OverpassElement, OverpassError> {
    let id = value.get("id").and_then(serde_json::Value::as_i64);
    let raw: RawElement = serde_json::from_value(value)
        .map_err(|e| OverpassError::MalformedElement {
            id,
            reason: e.to_string(),
        })?;
    OverpassElement::try_from(raw)
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
struct RawResponse {
    elements: Vec<serde_json::Value>,
    remark: Option<String>,
}

/// Only `id` is strict; side fields of the wrong shape are treated as absent
#[derive(Debug, Deserialize)]
struct RawElement {
    id: i64,
    #[serde(rename = "type")]
    kind: Option<serde_json::Value>,
    tags: Option<serde_json::Value>,
    lat: Option<serde_json::Value>,
    lon: Option<serde_json::Value>,
    center: Option<serde_json::Value>,
}

//! Output formatting for the `search` command

use application::SuggestionPick;
use domain::{Coordinate, RadiusMiles, Restaurant};
use serde::Serialize;

/// Everything the `search` command prints
#[derive(Debug)]
pub struct SearchView<'a> {
    pub center: Coordinate,
    pub radius: RadiusMiles,
    pub search: &'a str,
    pub visible: Vec<&'a Restaurant>,
    pub suggestions: Vec<&'a Restaurant>,
    pub pick: Option<SuggestionPick>,
}

#[derive(Serialize)]
struct RestaurantRow<'a> {
    id: i64,
    name: &'a str,
    lat: f64,
    lon: f64,
    distance_miles: f64,
}

#[derive(Serialize)]
struct FocusRow<'a> {
    name: &'a str,
    lat: f64,
    lon: f64,
}

#[derive(Serialize)]
struct SearchJson<'a> {
    lat: f64,
    lon: f64,
    radius_miles: f64,
    search: &'a str,
    suggestions: Vec<&'a str>,
    focus: Option<FocusRow<'a>>,
    results: Vec<RestaurantRow<'a>>,
}

fn distance_miles(center: &Coordinate, restaurant: &Restaurant) -> f64 {
    center.distance_miles(&restaurant.coordinate())
}

impl SearchView<'_> {
    /// Human-readable listing
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "📍 {} within {}: {} restaurant(s)",
            self.center,
            self.radius,
            self.visible.len()
        );
        if !self.search.is_empty() {
            out.push_str(&format!(" matching \"{}\"", self.search));
        }
        out.push('\n');

        if !self.suggestions.is_empty() {
            let names: Vec<&str> = self.suggestions.iter().map(|r| r.name.as_str()).collect();
            out.push_str(&format!("💡 Suggestions: {}\n", names.join(", ")));
        }

        if let Some(pick) = &self.pick {
            out.push_str(&format!("🎯 Focus: {} at {}\n", pick.search_text, pick.focus));
        }

        for restaurant in &self.visible {
            out.push_str(&format!(
                "  {:<32} {:>5.2} mi  ({:.5}, {:.5})\n",
                restaurant.name,
                distance_miles(&self.center, restaurant),
                restaurant.lat,
                restaurant.lon
            ));
        }
        out
    }

    /// JSON document
    pub fn to_json(&self) -> serde_json::Result<String> {
        let doc = SearchJson {
            lat: self.center.latitude(),
            lon: self.center.longitude(),
            radius_miles: self.radius.miles(),
            search: self.search,
            suggestions: self.suggestions.iter().map(|r| r.name.as_str()).collect(),
            focus: self.pick.as_ref().map(|p| FocusRow {
                name: &p.search_text,
                lat: p.focus.latitude(),
                lon: p.focus.longitude(),
            }),
            results: self
                .visible
                .iter()
                .map(|r| RestaurantRow {
                    id: r.id,
                    name: &r.name,
                    lat: r.lat,
                    lon: r.lon,
                    distance_miles: distance_miles(&self.center, r),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&doc)
    }
}

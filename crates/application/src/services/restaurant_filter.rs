//! Search filters over the current result set
//!
//! Pure functions for the search box: typeahead suggestions (name prefix)
//! and the visible subset (name substring). Matching is case-insensitive and
//! preserves the order of the input.

use domain::{Coordinate, Restaurant};

/// Maximum number of typeahead suggestions shown by default
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Restaurants whose name starts with `query`, at most `limit` of them
///
/// An empty query yields no suggestions.
#[must_use]
pub fn suggestions<'a>(
    query: &str,
    results: &'a [Restaurant],
    limit: usize,
) -> Vec<&'a Restaurant> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    results
        .iter()
        .filter(|r| r.name.to_lowercase().starts_with(&needle))
        .take(limit)
        .collect()
}

/// Restaurants whose name contains `query`
///
/// An empty query yields every result.
#[must_use]
pub fn visible<'a>(query: &str, results: &'a [Restaurant]) -> Vec<&'a Restaurant> {
    if query.is_empty() {
        return results.iter().collect();
    }

    let needle = query.to_lowercase();
    results
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

/// What the UI should do after a suggestion is picked
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionPick {
    /// New search text (the restaurant's exact name)
    pub search_text: String,
    /// Where to center the map
    pub focus: Coordinate,
}

/// Resolve a picked suggestion into new search text and a map focus
#[must_use]
pub fn select_suggestion(suggestion: &Restaurant) -> SuggestionPick {
    SuggestionPick {
        search_text: suggestion.name.clone(),
        focus: suggestion.coordinate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn named(names: &[&str]) -> Vec<Restaurant> {
        names
            .iter()
            .zip(1..)
            .map(|(name, id)| Restaurant::new(id, Some((*name).to_string()), 40.0, -73.0))
            .collect()
    }

    fn names<'a>(rs: &[&'a Restaurant]) -> Vec<&'a str> {
        rs.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_suggestions_prefix_in_order() {
        let results = named(&["Pizza Place", "Pita Hut", "Subway"]);
        let s = suggestions("pi", &results, DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(names(&s), vec!["Pizza Place", "Pita Hut"]);
    }

    #[test]
    fn test_suggestions_empty_query() {
        let results = named(&["Pizza Place", "Pita Hut"]);
        assert!(suggestions("", &results, DEFAULT_SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn test_suggestions_truncated_to_limit() {
        let results = named(&["Bar 1", "Bar 2", "Bar 3", "Bar 4", "Bar 5", "Bar 6", "Bar 7"]);
        let s = suggestions("bar", &results, DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(names(&s), vec!["Bar 1", "Bar 2", "Bar 3", "Bar 4", "Bar 5"]);

        assert_eq!(suggestions("bar", &results, 2).len(), 2);
        assert!(suggestions("bar", &results, 0).is_empty());
    }

    #[test]
    fn test_suggestions_case_insensitive() {
        let results = named(&["pizza place", "PIZZA HUT"]);
        let s = suggestions("PiZ", &results, DEFAULT_SUGGESTION_LIMIT);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_suggestions_ignore_infix_matches() {
        let results = named(&["Plaza", "Pizza Place"]);
        let s = suggestions("za", &results, DEFAULT_SUGGESTION_LIMIT);
        assert!(s.is_empty());
    }

    #[test]
    fn test_visible_substring_in_order() {
        let results = named(&["Pizza Place", "Plaza", "Subway"]);
        let v = visible("za", &results);
        assert_eq!(names(&v), vec!["Pizza Place", "Plaza"]);
    }

    #[test]
    fn test_visible_empty_query_returns_all() {
        let results = named(&["Pizza Place", "Plaza", "Subway"]);
        let v = visible("", &results);
        assert_eq!(v.len(), results.len());
        assert!(v.iter().zip(&results).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_visible_no_match() {
        let results = named(&["Pizza Place"]);
        assert!(visible("sushi", &results).is_empty());
    }

    #[test]
    fn test_visible_matches_unnamed_sentinel() {
        let results = vec![Restaurant::new(1, None, 40.0, -73.0)];
        assert_eq!(visible("unnamed", &results).len(), 1);
    }

    #[test]
    fn test_empty_results() {
        assert!(suggestions("a", &[], DEFAULT_SUGGESTION_LIMIT).is_empty());
        assert!(visible("a", &[]).is_empty());
        assert!(visible("", &[]).is_empty());
    }

    #[test]
    fn test_select_suggestion() {
        let r = Restaurant::new(9, Some("Pita Hut".to_string()), 41.0, -74.0);
        let pick = select_suggestion(&r);
        assert_eq!(pick.search_text, "Pita Hut");
        assert_eq!(pick.focus, r.coordinate());

        // The picked name filters the visible set down to that restaurant
        let results = vec![r.clone(), Restaurant::new(10, Some("Subway".to_string()), 0.0, 0.0)];
        assert_eq!(visible(&pick.search_text, &results), vec![&r]);
    }

    proptest! {
        #[test]
        fn suggestions_are_bounded_and_visible(
            names in proptest::collection::vec("[a-cA-C ]{0,6}", 0..20),
            query in "[a-cA-C]{0,2}",
            limit in 0usize..8,
        ) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let results = named(&refs);
            let s = suggestions(&query, &results, limit);
            let v = visible(&query, &results);

            prop_assert!(s.len() <= limit);
            for r in &s {
                prop_assert!(v.contains(r));
            }
            if query.is_empty() {
                prop_assert!(s.is_empty());
                prop_assert_eq!(v.len(), results.len());
            }
        }
    }
}

//! Application services - Use case implementations

mod refresh_controller;
pub mod restaurant_filter;

pub use refresh_controller::{
    FetchTicket, LOCATION_DENIED_MESSAGE, RefreshController, RefreshSnapshot,
};
pub use restaurant_filter::{
    DEFAULT_SUGGESTION_LIMIT, SuggestionPick, select_suggestion, suggestions, visible,
};

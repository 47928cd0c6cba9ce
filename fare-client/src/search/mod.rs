//! Debounced location autocomplete.
//!
//! Two independent pickers (start, end) share one remote search endpoint.
//! Keystrokes are debounced per field; failures degrade silently to "no
//! suggestions".

use std::time::Duration;

use crate::domain::Language;

mod controller;
mod debounce;
mod panel;

pub use controller::{LocationSource, SearchController, SearchState};
pub use debounce::Debouncer;
pub use panel::SearchPanel;

/// Quiet period after the last keystroke before a search is issued.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Maximum number of suggestions requested per search.
pub const SEARCH_LIMIT: usize = 15;

/// Language the pickers search in.
pub const SEARCH_LANGUAGE: Language = Language::En;

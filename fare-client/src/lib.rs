//! Bus fare calculator client.
//!
//! The interaction engine behind a fare-calculation form: a reducer-driven
//! form state machine, two debounced location autocomplete pickers, a
//! focus coordinator, and an HTTP client for the remote fare service.

pub mod api;
pub mod domain;
pub mod focus;
pub mod form;
pub mod search;
pub mod ui;

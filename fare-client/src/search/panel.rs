//! The pair of location search fields.

use std::sync::Arc;

use crate::domain::Location;
use crate::focus::{Field, FocusCoordinator};
use crate::form::FareAction;

use super::controller::{LocationSource, SearchController, SearchState};

/// Both autocomplete fields, with a single active dropdown between them.
///
/// Typing into or focusing one field closes the other's dropdown; a
/// click outside both containers closes whichever is open.
#[derive(Debug)]
pub struct SearchPanel<S> {
    start: SearchController<S>,
    end: SearchController<S>,
}

impl<S: LocationSource> SearchPanel<S> {
    /// Create the two controllers over a shared location source.
    pub fn new(source: Arc<S>, focus: FocusCoordinator) -> Self {
        Self {
            start: SearchController::new(Field::Start, Arc::clone(&source), focus.clone()),
            end: SearchController::new(Field::End, source, focus),
        }
    }

    fn controller(&self, field: Field) -> &SearchController<S> {
        match field {
            Field::Start => &self.start,
            Field::End => &self.end,
        }
    }

    fn other(&self, field: Field) -> &SearchController<S> {
        match field {
            Field::Start => &self.end,
            Field::End => &self.start,
        }
    }

    /// Snapshot one field's state.
    pub async fn snapshot(&self, field: Field) -> SearchState {
        self.controller(field).snapshot().await
    }

    /// Route a keystroke to a field, closing the other dropdown.
    pub async fn on_input(&self, field: Field, text: &str) {
        self.other(field).close_dropdown().await;
        self.controller(field).on_input(text).await;
    }

    /// Route a focus event to a field, closing the other dropdown.
    pub async fn on_focus(&self, field: Field) {
        self.other(field).close_dropdown().await;
        self.controller(field).on_focus().await;
    }

    /// Commit one of a field's current suggestions by index.
    ///
    /// Returns the form action to dispatch, or `None` when the index is
    /// out of range.
    pub async fn select(&self, field: Field, index: usize) -> Option<FareAction> {
        let location: Location = {
            let state = self.controller(field).snapshot().await;
            state.results.get(index)?.clone()
        };
        Some(self.controller(field).select(&location).await)
    }

    /// Close both dropdowns (a click outside the containers).
    pub async fn close_all(&self) {
        self.start.close_dropdown().await;
        self.end.close_dropdown().await;
    }

    /// Clear both fields (form reset).
    pub async fn clear(&self) {
        self.start.clear().await;
        self.end.clear().await;
    }
}

//! Autocomplete controller for one location input.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::{ApiClient, ApiError};
use crate::domain::{Language, Location, SearchResponse};
use crate::focus::{Field, FocusCoordinator};
use crate::form::FareAction;

use super::debounce::Debouncer;
use super::{SEARCH_DEBOUNCE, SEARCH_LANGUAGE, SEARCH_LIMIT};

/// Source of location suggestions.
///
/// The returned future must be `Send` because searches run on debounce
/// tasks, not on the caller.
pub trait LocationSource: Send + Sync + 'static {
    fn search_locations(
        &self,
        query: &str,
        lang: Language,
        limit: usize,
    ) -> impl Future<Output = Result<SearchResponse, ApiError>> + Send;
}

impl LocationSource for ApiClient {
    fn search_locations(
        &self,
        query: &str,
        lang: Language,
        limit: usize,
    ) -> impl Future<Output = Result<SearchResponse, ApiError>> + Send {
        ApiClient::search_locations(self, query, lang, limit)
    }
}

/// Observable state of one autocomplete field.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Current free-text query.
    pub query: String,
    /// Latest suggestions for the query.
    pub results: Vec<Location>,
    /// A search request is in flight.
    pub is_searching: bool,
    /// The suggestion dropdown is visible.
    pub dropdown_open: bool,
}

/// Debounced autocomplete for one of the two location inputs.
///
/// Owns the query text, result list, loading flag and dropdown
/// visibility. Search failures degrade to "no suggestions": they are
/// logged, never surfaced as a form error.
#[derive(Debug)]
pub struct SearchController<S> {
    field: Field,
    source: Arc<S>,
    focus: FocusCoordinator,
    state: Arc<RwLock<SearchState>>,
    debounce: Debouncer,
}

impl<S: LocationSource> SearchController<S> {
    /// Create a controller for the given field.
    pub fn new(field: Field, source: Arc<S>, focus: FocusCoordinator) -> Self {
        Self {
            field,
            source,
            focus,
            state: Arc::new(RwLock::new(SearchState::default())),
            debounce: Debouncer::new(SEARCH_DEBOUNCE),
        }
    }

    /// The field this controller belongs to.
    pub fn field(&self) -> Field {
        self.field
    }

    /// Snapshot the current state.
    pub async fn snapshot(&self) -> SearchState {
        self.state.read().await.clone()
    }

    /// Handle one keystroke's worth of input.
    ///
    /// Queries shorter than two characters (after trimming) clear the
    /// results without touching the network. Anything longer schedules a
    /// search after the quiet period; every keystroke cancels the
    /// previous pending timer.
    pub async fn on_input(&self, text: &str) {
        {
            let mut state = self.state.write().await;
            state.query = text.to_string();
            state.dropdown_open = true;
        }
        self.focus.focus(self.field).await;

        let trimmed = text.trim().to_string();
        if trimmed.chars().count() < 2 {
            self.debounce.cancel();
            let mut state = self.state.write().await;
            state.results.clear();
            state.is_searching = false;
            return;
        }

        let field = self.field;
        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let focus = self.focus.clone();

        self.debounce.schedule(async move {
            state.write().await.is_searching = true;

            // Last response wins: a stale result superseded mid-flight by
            // a newer query is not discarded here.
            match source
                .search_locations(&trimmed, SEARCH_LANGUAGE, SEARCH_LIMIT)
                .await
            {
                Ok(response) => {
                    tracing::debug!(%field, query = %trimmed, hits = response.locations.len(), "search completed");
                    let mut state = state.write().await;
                    state.results = response.locations;
                    state.is_searching = false;
                }
                Err(err) => {
                    tracing::warn!(%field, query = %trimmed, error = %err, "location search failed");
                    let mut state = state.write().await;
                    state.results.clear();
                    state.is_searching = false;
                }
            }

            // The async update may have stolen focus in the original UI;
            // restore it when this field is still the active one.
            if focus.active().await == Some(field) {
                focus.request_focus(field, false);
            }
        });
    }

    /// Handle the input gaining focus: open this dropdown.
    pub async fn on_focus(&self) {
        self.focus.focus(self.field).await;
        self.state.write().await.dropdown_open = true;
    }

    /// Commit a suggestion.
    ///
    /// Sets the text to the selection's display name, closes the
    /// dropdown, clears the results, asks the presentation layer to
    /// re-focus this input with the caret at end-of-text, and returns the
    /// action that commits the location into the form state.
    pub async fn select(&self, location: &Location) -> FareAction {
        self.debounce.cancel();
        {
            let mut state = self.state.write().await;
            state.query = location.name_en.clone();
            state.dropdown_open = false;
            state.results.clear();
            state.is_searching = false;
        }

        self.focus.request_focus(self.field, true);

        match self.field {
            Field::Start => FareAction::SetStartLocation(location.clone()),
            Field::End => FareAction::SetEndLocation(location.clone()),
        }
    }

    /// Close the dropdown without touching query or results.
    pub async fn close_dropdown(&self) {
        self.state.write().await.dropdown_open = false;
    }

    /// Clear the field entirely (query, results, flags).
    pub async fn clear(&self) {
        self.debounce.cancel();
        *self.state.write().await = SearchState::default();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::focus::UiCommand;

    /// Recording source with canned suggestions.
    struct MockSource {
        queries: Mutex<Vec<String>>,
        fail: bool,
        locations: Vec<Location>,
    }

    impl MockSource {
        fn with_locations(locations: Vec<Location>) -> Self {
            Self {
                queries: Mutex::new(Vec::new()),
                fail: false,
                locations,
            }
        }

        fn failing() -> Self {
            Self {
                queries: Mutex::new(Vec::new()),
                fail: true,
                locations: Vec::new(),
            }
        }

        fn queries(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }
    }

    impl LocationSource for MockSource {
        async fn search_locations(
            &self,
            query: &str,
            _lang: Language,
            _limit: usize,
        ) -> Result<SearchResponse, ApiError> {
            self.queries.lock().unwrap().push(query.to_string());
            if self.fail {
                return Err(ApiError::Api {
                    status: 500,
                    message: "search unavailable".into(),
                });
            }
            Ok(SearchResponse {
                locations: self.locations.clone(),
                total: self.locations.len(),
                query: query.to_string(),
            })
        }
    }

    fn dhaka() -> Location {
        Location::new("Dhaka", "ঢাকা", 23.8103, 90.4125)
    }

    fn controller_with(
        source: MockSource,
    ) -> (
        SearchController<MockSource>,
        Arc<MockSource>,
        tokio::sync::mpsc::UnboundedReceiver<UiCommand>,
    ) {
        let (focus, rx) = FocusCoordinator::new();
        let source = Arc::new(source);
        (
            SearchController::new(Field::Start, Arc::clone(&source), focus),
            source,
            rx,
        )
    }

    async fn settle() {
        tokio::time::sleep(SEARCH_DEBOUNCE + Duration::from_millis(100)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn short_query_issues_no_request() {
        let (controller, source, _rx) = controller_with(MockSource::with_locations(vec![dhaka()]));

        controller.on_input("a").await;
        settle().await;

        assert!(source.queries().is_empty());
        let state = controller.snapshot().await;
        assert!(state.results.is_empty());
        assert!(!state.is_searching);
    }

    #[tokio::test(start_paused = true)]
    async fn burst_of_keystrokes_issues_one_request_for_the_last() {
        let (controller, source, _rx) = controller_with(MockSource::with_locations(vec![dhaka()]));

        controller.on_input("Dha").await;
        controller.on_input("Dhak").await;
        controller.on_input("Dhaka").await;
        settle().await;

        assert_eq!(source.queries(), vec!["Dhaka".to_string()]);
        let state = controller.snapshot().await;
        assert_eq!(state.results, vec![dhaka()]);
        assert!(!state.is_searching);
    }

    #[tokio::test(start_paused = true)]
    async fn query_is_trimmed_before_searching() {
        let (controller, source, _rx) = controller_with(MockSource::with_locations(vec![dhaka()]));

        controller.on_input("  Dhaka  ").await;
        settle().await;

        assert_eq!(source.queries(), vec!["Dhaka".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn shrinking_below_two_chars_cancels_pending_search() {
        let (controller, source, _rx) = controller_with(MockSource::with_locations(vec![dhaka()]));

        controller.on_input("Dh").await;
        controller.on_input("D").await;
        settle().await;

        assert!(source.queries().is_empty());
        assert!(controller.snapshot().await.results.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn failure_degrades_to_no_suggestions() {
        let (controller, source, _rx) = controller_with(MockSource::failing());

        controller.on_input("Dhaka").await;
        settle().await;

        assert_eq!(source.queries().len(), 1);
        let state = controller.snapshot().await;
        assert!(state.results.is_empty());
        assert!(!state.is_searching);
        // Dropdown stays open; it simply has nothing to show.
        assert!(state.dropdown_open);
    }

    #[tokio::test(start_paused = true)]
    async fn select_commits_and_requests_caret_at_end() {
        let (focus, mut rx) = FocusCoordinator::new();
        let source = Arc::new(MockSource::with_locations(vec![dhaka()]));
        let controller = SearchController::new(Field::End, source, focus);

        controller.on_input("Dhaka").await;
        settle().await;

        // Drain the focus restore emitted after the search completed.
        while rx.try_recv().is_ok() {}

        let action = controller.select(&dhaka()).await;
        assert_eq!(action, FareAction::SetEndLocation(dhaka()));

        let state = controller.snapshot().await;
        assert_eq!(state.query, "Dhaka");
        assert!(!state.dropdown_open);
        assert!(state.results.is_empty());

        assert_eq!(
            rx.try_recv().unwrap(),
            UiCommand::FocusField {
                field: Field::End,
                caret_end: true
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn completed_search_restores_focus_to_active_field() {
        let (focus, mut rx) = FocusCoordinator::new();
        let source = Arc::new(MockSource::with_locations(vec![dhaka()]));
        let controller = SearchController::new(Field::Start, source, focus.clone());

        controller.on_input("Dhaka").await;
        settle().await;

        assert_eq!(
            rx.try_recv().unwrap(),
            UiCommand::FocusField {
                field: Field::Start,
                caret_end: false
            }
        );

        // No restore when focus moved elsewhere before completion.
        focus.focus(Field::End).await;
        controller.on_input("Mirpur").await;
        focus.focus(Field::End).await;
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn clear_resets_everything() {
        let (controller, _source, _rx) = controller_with(MockSource::with_locations(vec![dhaka()]));

        controller.on_input("Dhaka").await;
        settle().await;
        assert!(!controller.snapshot().await.results.is_empty());

        controller.clear().await;
        let state = controller.snapshot().await;
        assert_eq!(state.query, "");
        assert!(state.results.is_empty());
        assert!(!state.dropdown_open);
        assert!(!state.is_searching);
    }
}

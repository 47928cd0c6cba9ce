//! Submission lifecycle for the fare form.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::api::{ApiClient, ApiError};
use crate::domain::{FareRequest, FareResponse};

use super::action::FareAction;
use super::state::{FareState, InputMode};
use super::validate::build_request;

/// Source of fare calculations.
///
/// Abstracts the fare service so tests can substitute a recording mock.
pub trait FareGateway {
    /// Calculate the fare for one request.
    async fn calculate_fare(&self, request: &FareRequest) -> Result<FareResponse, ApiError>;
}

impl FareGateway for ApiClient {
    async fn calculate_fare(&self, request: &FareRequest) -> Result<FareResponse, ApiError> {
        ApiClient::calculate_fare(self, request).await
    }
}

/// The fare form: reducer-owned state plus the request lifecycle around it.
///
/// State is only ever changed through [`FareAction`]s. One fare request is
/// outstanding at a time because submission is refused while loading (the
/// disabled submit button); the reducer itself does not cancel anything.
#[derive(Debug, Clone)]
pub struct FareForm<G> {
    gateway: Arc<G>,
    state: Arc<RwLock<FareState>>,
}

impl<G: FareGateway> FareForm<G> {
    /// Create a form in the initial state.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            state: Arc::new(RwLock::new(FareState::initial())),
        }
    }

    /// Snapshot the current state.
    pub async fn state(&self) -> FareState {
        self.state.read().await.clone()
    }

    /// Dispatch one action into the reducer.
    pub async fn dispatch(&self, action: FareAction) {
        self.state.write().await.apply(action);
    }

    /// Submit the form.
    ///
    /// Validation runs first and short-circuits with an error action
    /// before any network call. On a validation pass, exactly one request
    /// is issued; its outcome settles the state as success or failure.
    pub async fn submit(&self, mode: InputMode) {
        let request = {
            let state = self.state.read().await;
            if state.is_loading {
                tracing::debug!("submit ignored: a fare request is already in flight");
                return;
            }
            build_request(&state, mode)
        };

        let request = match request {
            Ok(request) => request,
            Err(err) => {
                self.dispatch(FareAction::CalculateFareError(err.to_string())).await;
                return;
            }
        };

        self.dispatch(FareAction::CalculateFareStart).await;

        match self.gateway.calculate_fare(&request).await {
            Ok(details) => {
                tracing::debug!(fare = details.fare, "fare calculated");
                self.dispatch(FareAction::CalculateFareSuccess(details)).await;
            }
            Err(err) => {
                tracing::debug!(error = %err, "fare calculation failed");
                self.dispatch(FareAction::CalculateFareError(err.user_message())).await;
            }
        }
    }

    /// Reset the form to its initial state.
    pub async fn reset(&self) {
        self.dispatch(FareAction::ResetForm).await;
    }
}

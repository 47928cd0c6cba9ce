//! Client-side validation gate.
//!
//! Runs before any network call; a submission that fails here never
//! reaches the fare service.

use crate::domain::FareRequest;

use super::state::{FareState, InputMode};

/// Validation failures, with the messages shown in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a valid distance greater than 0")]
    InvalidDistance,

    #[error("Please provide both start location and destination")]
    MissingLocations,
}

/// Validate the form and build the fare request for it.
///
/// In distance mode the free-text distance must parse as a finite number
/// greater than zero. In locations mode both location slots must carry a
/// selection. The distance field is only sent in distance mode; the
/// server derives it from the route otherwise.
pub fn build_request(
    state: &FareState,
    mode: InputMode,
) -> Result<FareRequest, ValidationError> {
    let distance = match mode {
        InputMode::Distance => {
            let km: f64 = state.distance.trim().parse().unwrap_or(0.0);
            if !km.is_finite() || km <= 0.0 {
                return Err(ValidationError::InvalidDistance);
            }
            Some(km)
        }
        InputMode::Locations => {
            if state.start_location.name_en.trim().is_empty()
                || state.end_location.name_en.trim().is_empty()
            {
                return Err(ValidationError::MissingLocations);
            }
            None
        }
    };

    Ok(FareRequest {
        start_location: state.start_location.clone(),
        end_location: state.end_location.clone(),
        distance,
        bus_type: state.bus_type,
        discount_type: state.discount_type,
    })
}

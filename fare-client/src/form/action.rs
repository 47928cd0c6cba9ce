//! Fare form actions and reducer.
//!
//! The form moves through Idle → Submitting → Success/Failed, with both
//! terminal states returning to Idle on the next edit or explicit reset.
//! Each action replaces a whole field; nothing mutates state partially.

use crate::domain::{BusType, DiscountType, FareResponse, Location};

use super::state::FareState;

/// Discrete transitions of the fare form.
#[derive(Debug, Clone, PartialEq)]
pub enum FareAction {
    SetStartLocation(Location),
    SetEndLocation(Location),
    SetDistance(String),
    SetBusType(BusType),
    SetDiscountType(DiscountType),
    CalculateFareStart,
    CalculateFareSuccess(FareResponse),
    CalculateFareError(String),
    ResetForm,
}

impl FareState {
    /// Apply one action to the state.
    ///
    /// Location and distance edits clear any existing error, so a failed
    /// submission returns to Idle as soon as the user corrects the form.
    pub fn apply(&mut self, action: FareAction) {
        match action {
            FareAction::SetStartLocation(location) => {
                self.start_location = location;
                self.error = None;
            }
            FareAction::SetEndLocation(location) => {
                self.end_location = location;
                self.error = None;
            }
            FareAction::SetDistance(distance) => {
                self.distance = distance;
                self.error = None;
            }
            FareAction::SetBusType(bus_type) => {
                self.bus_type = bus_type;
            }
            FareAction::SetDiscountType(discount_type) => {
                self.discount_type = discount_type;
            }
            FareAction::CalculateFareStart => {
                self.is_loading = true;
                self.error = None;
                self.show_results = false;
            }
            FareAction::CalculateFareSuccess(details) => {
                self.is_loading = false;
                self.calculated_fare = Some(details.fare);
                self.fare_details = Some(details);
                self.show_results = true;
                self.error = None;
            }
            FareAction::CalculateFareError(message) => {
                self.is_loading = false;
                self.error = Some(message);
                self.show_results = false;
            }
            FareAction::ResetForm => {
                *self = FareState::initial();
            }
        }
    }
}

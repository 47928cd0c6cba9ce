//! Fare form state.

use crate::domain::{BusType, DiscountType, FareResponse, Location};

/// How the user supplies the route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Pick start and destination via location search.
    #[default]
    Locations,
    /// Type the distance in kilometres directly.
    Distance,
}

/// The full submission state of the fare form.
///
/// Mutated only through [`FareAction`](super::FareAction)s, never
/// partially. Two flags never hold at once: `show_results` and `error`
/// are mutually exclusive, and `is_loading` excludes both until the
/// request settles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FareState {
    pub start_location: Location,
    pub end_location: Location,
    /// Free-text distance input; parsed only at validation time.
    pub distance: String,
    pub bus_type: BusType,
    pub discount_type: DiscountType,
    pub calculated_fare: Option<f64>,
    pub fare_details: Option<FareResponse>,
    pub show_results: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl FareState {
    /// The state the form starts in and returns to on reset.
    pub fn initial() -> Self {
        Self::default()
    }
}

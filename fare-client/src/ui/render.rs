//! Stateless text renderers keyed off the interaction state.

use crate::domain::{FareResponse, Location};
use crate::form::{FareState, InputMode};

/// Format an amount in taka, dropping a whole number's trailing `.0`.
pub fn format_taka(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("৳{}", amount as i64)
    } else {
        format!("৳{amount}")
    }
}

/// The fare result card.
pub fn result_card(details: &FareResponse, state: &FareState, mode: InputMode) -> String {
    let mut card = String::new();
    card.push_str(&format!("Fare: {}\n", format_taka(details.fare)));
    card.push_str(&format!("Distance: {} km\n", details.distance));
    card.push_str(&format!("Bus type: {}\n", details.bus_type));
    card.push_str(&format!(
        "Base rate: {} / km\n",
        format_taka(details.base_rate)
    ));
    if details.discount_percentage > 0.0 {
        card.push_str(&format!(
            "Discount: {} ({}%)\n",
            details.discount_applied, details.discount_percentage
        ));
    }
    if mode == InputMode::Locations {
        card.push_str(&format!(
            "Route: {} → {}\n",
            state.start_location.name_en, state.end_location.name_en
        ));
    }
    card
}

/// The error banner.
pub fn error_banner(message: &str) -> String {
    format!("error: {message}")
}

/// The suggestion dropdown, one numbered line per location.
pub fn dropdown(results: &[Location]) -> String {
    if results.is_empty() {
        return "  (no suggestions)\n".to_string();
    }
    let mut out = String::new();
    for (index, location) in results.iter().enumerate() {
        out.push_str(&format!(
            "  [{index}] {} / {}\n",
            location.name_en, location.name_bn
        ));
    }
    out
}

/// A one-screen summary of the form.
pub fn form_summary(state: &FareState, mode: InputMode) -> String {
    let mut out = String::new();
    match mode {
        InputMode::Locations => {
            out.push_str(&format!(
                "from: {}\n",
                selected_name(&state.start_location)
            ));
            out.push_str(&format!("to:   {}\n", selected_name(&state.end_location)));
        }
        InputMode::Distance => {
            let distance = if state.distance.is_empty() {
                "(unset)"
            } else {
                state.distance.as_str()
            };
            out.push_str(&format!("distance: {distance} km\n"));
        }
    }
    out.push_str(&format!("bus: {}\n", state.bus_type));
    out.push_str(&format!("discount: {}\n", state.discount_type));
    if state.is_loading {
        out.push_str("calculating...\n");
    }
    out
}

fn selected_name(location: &Location) -> &str {
    if location.is_selected() {
        &location.name_en
    } else {
        "(unset)"
    }
}

//! The fare form state machine.
//!
//! Owns the full submission state and moves it through
//! validate → request → success/error, driven by discrete actions.

mod action;
mod controller;
mod state;
mod validate;

pub use action::FareAction;
pub use controller::{FareForm, FareGateway};
pub use state::{FareState, InputMode};
pub use validate::{ValidationError, build_request};

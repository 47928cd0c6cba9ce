//! Stateless presentation helpers.
//!
//! Pure renderers keyed off the form and search state; nothing here owns
//! or mutates state.

pub mod render;

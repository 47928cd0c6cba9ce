//! Focus coordination between the two location inputs.
//!
//! The original form re-focused inputs directly as a side effect of async
//! result updates. Here those side effects are explicit: the coordinator
//! tracks which field is active and emits [`UiCommand`]s that the
//! presentation layer applies.

use std::fmt;
use std::sync::Arc;

use tokio::sync::{RwLock, mpsc};

/// One of the two location inputs on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Start,
    End,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Start => f.write_str("start"),
            Field::End => f.write_str("end"),
        }
    }
}

/// Keys the coordinator cares about.
///
/// Tab traversal between the two fields overrides the default tab order;
/// every other key is the presentation layer's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    ShiftTab,
}

/// Commands emitted to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    /// Restore input focus to a field, optionally placing the caret at
    /// the end of its text.
    FocusField { field: Field, caret_end: bool },
}

/// Tracks the active location input and drives explicit focus commands.
///
/// Clones share the same active-field state and command channel.
#[derive(Debug, Clone)]
pub struct FocusCoordinator {
    active: Arc<RwLock<Option<Field>>>,
    commands: mpsc::UnboundedSender<UiCommand>,
}

impl FocusCoordinator {
    /// Create a coordinator and the command stream the presentation
    /// layer should drain.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<UiCommand>) {
        let (commands, receiver) = mpsc::unbounded_channel();
        (
            Self {
                active: Arc::new(RwLock::new(None)),
                commands,
            },
            receiver,
        )
    }

    /// Record that a field received focus.
    pub async fn focus(&self, field: Field) {
        *self.active.write().await = Some(field);
    }

    /// Record that focus left both fields.
    pub async fn blur(&self) {
        *self.active.write().await = None;
    }

    /// The currently active field, if any.
    pub async fn active(&self) -> Option<Field> {
        *self.active.read().await
    }

    /// Ask the presentation layer to restore focus to a field.
    pub fn request_focus(&self, field: Field, caret_end: bool) {
        let command = UiCommand::FocusField { field, caret_end };
        if self.commands.send(command).is_err() {
            tracing::debug!(%field, "focus command dropped: no presentation listener");
        }
    }

    /// Apply tab-key traversal between the two fields.
    ///
    /// Tab with no modifier while the start field is active moves focus
    /// to the end field; Shift+Tab while the end field is active moves it
    /// back. Anything else leaves focus alone and returns `None`.
    pub async fn handle_key(&self, key: Key) -> Option<Field> {
        let active = *self.active.read().await;

        let next = match (key, active) {
            (Key::Tab, Some(Field::Start)) => Some(Field::End),
            (Key::ShiftTab, Some(Field::End)) => Some(Field::Start),
            _ => None,
        };

        if let Some(field) = next {
            *self.active.write().await = Some(field);
            self.request_focus(field, false);
        }

        next
    }
}

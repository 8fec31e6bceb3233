//! Per-user session data.

use content_generator::{Draft, Model};
use std::fmt;

/// Where a user is in the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Waiting for a model button.
    AwaitModel,
    /// Waiting for the topic text.
    AwaitTopic,
    /// A publish call is in flight.
    AwaitConfirmation,
    /// A draft is shown with its action buttons.
    Proposal,
    /// Waiting for the user's change requests.
    AwaitSuggestions,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::AwaitModel => "await_model",
            SessionState::AwaitTopic => "await_topic",
            SessionState::AwaitConfirmation => "await_confirmation",
            SessionState::Proposal => "proposal",
            SessionState::AwaitSuggestions => "await_suggestions",
        };
        f.write_str(name)
    }
}

/// Everything the bot remembers about one user between events. At most one draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub model: Model,
    pub topic: Option<String>,
    pub draft: Option<Draft>,
    pub state: SessionState,
}

impl Session {
    pub fn new(user_id: i64, model: Model, state: SessionState) -> Self {
        Self {
            user_id,
            model,
            topic: None,
            draft: None,
            state,
        }
    }
}

//! The generated title/body pair.

use serde::{Deserialize, Serialize};

/// Title of the sentinel draft returned when generation fails.
pub const FALLBACK_TITLE: &str = "Error generating title";
/// Body of the sentinel draft returned when generation fails.
pub const FALLBACK_BODY: &str = "Could not generate content.";

/// Generated post awaiting publication or revision. `body` never contains HTML tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub body: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// The sentinel draft.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_TITLE, FALLBACK_BODY)
    }

    pub fn is_fallback(&self) -> bool {
        self.title == FALLBACK_TITLE && self.body == FALLBACK_BODY
    }

    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

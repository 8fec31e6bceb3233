//! Core types: user, chat, inbound event, outbound reply, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// What the user did: typed text, issued a command, or pressed an inline button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Free text (topic or suggestion).
    Text(String),
    /// `/name args`; `name` is lowercase without the slash or `@botname` suffix.
    Command { name: String, args: String },
    /// Inline button press. `message_id` is the message carrying the button, when known.
    Callback {
        data: String,
        message_id: Option<String>,
    },
    /// Anything the bot cannot interpret (stickers, photos, ...).
    Unsupported,
}

/// A single inbound chat event addressed to a user and chat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub kind: EventKind,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Short, log-friendly description of the event kind.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            EventKind::Text(_) => "text",
            EventKind::Command { .. } => "command",
            EventKind::Callback { .. } => "callback",
            EventKind::Unsupported => "unsupported",
        }
    }
}

/// How the transport should interpret the reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextFormat {
    #[default]
    Plain,
    /// Telegram-flavoured HTML (`<b>`, `<i>`, `<u>`); callers escape user content with [`escape_html`].
    Html,
}

/// A labeled choice button; `data` comes back as [`EventKind::Callback`] when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub data: String,
}

impl Button {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

/// Outbound message: text plus an optional keyboard (one inner Vec per row).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    pub keyboard: Vec<Vec<Button>>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            keyboard: Vec::new(),
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Html,
            keyboard: Vec::new(),
        }
    }

    /// Appends one row of buttons.
    pub fn with_row(mut self, row: Vec<Button>) -> Self {
        self.keyboard.push(row);
        self
    }

    pub fn has_keyboard(&self) -> bool {
        !self.keyboard.is_empty()
    }
}

/// Escapes `<`, `>` and `&` so user or model text is safe inside an HTML reply.
pub fn escape_html(text: &str) -> String {
    teloxide::utils::html::escape(text)
}

/// Cuts `text` to at most `max_chars` characters, appending `…` when something was dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// Handler result for the chain. `Reply(text)` carries the last reply body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach reply text.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific update type to core [`Event`].
pub trait ToCoreEvent: Send + Sync {
    fn to_core(&self) -> Event;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _event: &Event) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the event. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _event: &Event) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _event: &Event,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

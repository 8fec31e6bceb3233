//! Bot abstraction for sending and editing messages.
//!
//! [`Bot`] is transport-agnostic; wpbot-telegram implements it via teloxide and tests substitute
//! recording mocks.

use crate::error::{Result, WpbotError};
use crate::types::{Chat, Reply};
use async_trait::async_trait;

/// Abstraction for sending and editing messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a formatted reply (optionally with buttons) and returns the transport message id.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<String>;
    /// Edits the text of an already-sent message. `message_id` is transport-specific (e.g. Telegram numeric string).
    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;
    /// Sends a plain text message and returns its id (for a later `edit_message`).
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        self.send_reply(chat, &Reply::plain(text)).await
    }
}

/// Parses a message id string into an i32. Used by edit_message implementations.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| WpbotError::Bot(format!("Invalid message_id for edit: {}", s)))
}

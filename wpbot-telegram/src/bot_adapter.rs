//! Wraps teloxide::Bot and implements [`wpbot_core::Bot`]. Production code sends messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode},
};
use wpbot_core::{parse_message_id, Bot as CoreBot, Button, Chat, Reply, Result, TextFormat, WpbotError};

/// Thin wrapper around teloxide::Bot that implements wpbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

fn keyboard(rows: &[Vec<Button>]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.data.clone()))
            .collect::<Vec<_>>()
    }))
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| WpbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<String> {
        let mut request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        if reply.format == TextFormat::Html {
            request = request.parse_mode(ParseMode::Html);
        }
        if reply.has_keyboard() {
            request = request.reply_markup(keyboard(&reply.keyboard));
        }
        let sent = request
            .await
            .map_err(|e| WpbotError::Bot(e.to_string()))?;
        Ok(sent.id.to_string())
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text)
            .await
            .map_err(|e| WpbotError::Bot(e.to_string()))?;
        Ok(())
    }
}

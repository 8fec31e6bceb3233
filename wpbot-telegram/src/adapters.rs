//! Adapters from Telegram (teloxide) types to wpbot_core types.

use teloxide::types::{CallbackQuery, Message};
use wpbot_core::{Chat, Event, EventKind, ToCoreEvent, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = if chat.is_private() {
        "private"
    } else if chat.is_supergroup() {
        "supergroup"
    } else if chat.is_group() {
        "group"
    } else {
        "channel"
    };
    Chat {
        id: chat.id.0,
        chat_type: chat_type.to_string(),
    }
}

fn anonymous() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

/// Splits `/name@bot args` into a lowercase name and the trimmed args. `None` if not a command.
pub fn parse_command(text: &str) -> Option<(String, String)> {
    let rest = text.trim_start().strip_prefix('/')?;
    let (head, args) = match rest.split_once(char::is_whitespace) {
        Some((head, args)) => (head, args.trim()),
        None => (rest, ""),
    };
    let name = head.split('@').next().unwrap_or(head);
    if name.is_empty() {
        return None;
    }
    Some((name.to_lowercase(), args.to_string()))
}

/// Wraps a teloxide Message for conversion to a core [`Event`] (text or command).
pub struct TelegramMessageWrapper<'a>(pub &'a Message);

impl<'a> ToCoreEvent for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Event {
        let kind = match self.0.text() {
            Some(text) => match parse_command(text) {
                Some((name, args)) => EventKind::Command { name, args },
                None => EventKind::Text(text.to_string()),
            },
            None => EventKind::Unsupported,
        };
        Event {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(anonymous),
            chat: core_chat(&self.0.chat),
            kind,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Wraps a teloxide CallbackQuery (inline button press) for conversion to a core [`Event`].
pub struct TelegramCallbackWrapper<'a>(pub &'a CallbackQuery);

impl<'a> ToCoreEvent for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Event {
        let user = TelegramUserWrapper(&self.0.from).to_core();
        let message = self.0.message.as_ref();
        let chat = message
            .map(|m| core_chat(m.chat()))
            .unwrap_or_else(|| Chat {
                id: user.id,
                chat_type: "private".to_string(),
            });
        let kind = match &self.0.data {
            Some(data) => EventKind::Callback {
                data: data.clone(),
                message_id: message.map(|m| m.id().to_string()),
            },
            None => EventKind::Unsupported,
        };
        Event {
            id: self.0.id.to_string(),
            user,
            chat,
            kind,
            created_at: chrono::Utc::now(),
        }
    }
}

//! # wpbot-telegram
//!
//! Telegram transport: converts teloxide updates into core [`wpbot_core::Event`]s, implements
//! [`wpbot_core::Bot`] (HTML replies with inline keyboards) and runs the teloxide dispatcher
//! (long polling, or a webhook listener when configured) in front of a handler chain.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{
    parse_command, TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper,
};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{build_bot, run_dispatcher, Command};

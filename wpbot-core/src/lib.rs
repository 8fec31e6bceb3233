//! # wpbot-core
//!
//! Core types and traits for the blog bot: [`Bot`], [`Handler`], inbound [`Event`]s, outbound
//! [`Reply`]s and tracing initialization. Transport-agnostic; used by wpbot-telegram,
//! handler-chain and the conversation crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{HandlerError, Result, WpbotError};
pub use logger::{init_console_tracing, init_tracing};
pub use types::{
    escape_html, truncate_chars, Button, Chat, Event, EventKind, Handler, HandlerResponse, Reply,
    TextFormat, ToCoreEvent, ToCoreUser, User,
};

//! # wpbot
//!
//! Application crate: loads configuration from env, assembles the generator, publisher and
//! conversation machine, builds the handler chain and runs the Telegram dispatcher.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_generator, build_handler_chain, build_machine, BotComponents};
pub use config::{BaseConfig, BotConfig};
pub use handlers::{AuthHandler, LoggingHandler};
pub use runner::{generate_once, run_bot};

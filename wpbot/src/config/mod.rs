//! Bot configuration: BaseConfig (Telegram + log + allowlist) plus the configs owned by the
//! LLM, generator, WordPress and conversation crates.

mod base;
mod bot_config;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bot_config::BotConfig;

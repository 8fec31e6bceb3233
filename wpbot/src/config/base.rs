//! Base config: Telegram connection, logging, allowlist. Loaded from env.

use anyhow::{Context, Result};
use std::env;
use wpbot_telegram::TelegramConfig;

/// Base config: Telegram-related, logging and access control only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// BOT_TOKEN, API URL override, WEBHOOK_URL and PORT
    pub telegram: TelegramConfig,
    /// Log file path
    pub log_file: String,
    /// ALLOWED_USER_IDS (comma-separated); empty allows everyone
    pub allowed_user_ids: Vec<i64>,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/wpbot.log".to_string());
        let allowed_user_ids = match env::var("ALLOWED_USER_IDS") {
            Ok(raw) => parse_user_ids(&raw)?,
            Err(_) => Vec::new(),
        };
        Ok(Self {
            telegram,
            log_file,
            allowed_user_ids,
        })
    }

    /// Validate config (e.g. URLs must parse).
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }
}

fn parse_user_ids(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .with_context(|| format!("ALLOWED_USER_IDS contains a non-numeric id: {}", s))
        })
        .collect()
}

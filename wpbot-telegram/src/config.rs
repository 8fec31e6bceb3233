//! Transport config: token, API URL, optional webhook. Loaded from env.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_PORT: u16 = 8080;

/// Telegram connection settings.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Public URL Telegram posts updates to; long polling when `None`.
    pub webhook_url: Option<String>,
    /// Local port of the webhook listener.
    pub port: u16,
}

impl TelegramConfig {
    /// Loads BOT_TOKEN (or TELEGRAM_TOKEN), TELEGRAM_API_URL, WEBHOOK_URL and PORT. `token` overrides the env token.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN")
                .or_else(|_| env::var("TELEGRAM_TOKEN"))
                .context("BOT_TOKEN (or TELEGRAM_TOKEN) not set")?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let webhook_url = env::var("WEBHOOK_URL").ok().filter(|s| !s.trim().is_empty());
        let port = match env::var("PORT") {
            Ok(port) => port
                .trim()
                .parse()
                .with_context(|| format!("PORT is not a valid port: {}", port))?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self {
            bot_token,
            telegram_api_url,
            webhook_url,
            port,
        })
    }

    /// Uses the given token; no API URL override, polling.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            webhook_url: None,
            port: DEFAULT_PORT,
        }
    }

    /// Address the webhook listener binds to.
    pub fn listen_address(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    /// URLs must parse; the token must not be empty.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if let Some(ref url_str) = self.webhook_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("WEBHOOK_URL is not a valid URL: {}", url_str);
            }
        }
        Ok(())
    }
}

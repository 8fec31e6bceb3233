//! BotConfig: BaseConfig plus the per-crate configs. Use load() for env-based loading.

use anyhow::{Context, Result};
use content_generator::{GeneratorConfig, Model};
use conversation::ConversationSettings;
use llm_client::{EnvLlmConfig, LlmConfig};
use wordpress_client::WordPressConfig;

use super::BaseConfig;

/// Everything `run` needs. Each part is loaded by the crate that owns it.
pub struct BotConfig {
    pub base: BaseConfig,
    pub llm: EnvLlmConfig,
    pub generator: GeneratorConfig,
    pub wordpress: WordPressConfig,
    pub conversation: ConversationSettings,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let llm = EnvLlmConfig::from_env()?;
        let generator = GeneratorConfig::from_env(&llm);
        let wordpress = WordPressConfig::from_env()?;
        let conversation = ConversationSettings::from_env()?;
        Ok(Self {
            base,
            llm,
            generator,
            wordpress,
            conversation,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        if reqwest::Url::parse(self.llm.base_url()).is_err() {
            anyhow::bail!("OPENAI_BASE_URL is not a valid URL: {}", self.llm.base_url());
        }
        Model::parse(self.llm.model()).context("MODEL is not a selectable model")?;
        self.wordpress.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }

    pub fn bot_token(&self) -> &str {
        &self.base.telegram.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram.telegram_api_url.as_deref()
    }
    pub fn webhook_url(&self) -> Option<&str> {
        self.base.telegram.webhook_url.as_deref()
    }
}

//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    /// Model used when a conversation has not chosen one.
    fn model(&self) -> &str;
    /// Upper bound for one generation call.
    fn timeout(&self) -> Duration;
    fn system_prompt(&self) -> Option<&str>;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub llm_system_prompt: Option<String>,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn model(&self) -> &str {
        &self.llm_model
    }
    fn timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }
    fn system_prompt(&self) -> Option<&str> {
        self.llm_system_prompt.as_deref()
    }
}

impl EnvLlmConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let llm_model = env::var("MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        let llm_timeout_secs = env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        let llm_system_prompt = env::var("LLM_SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            openai_api_key,
            openai_base_url,
            llm_model,
            llm_timeout_secs,
            llm_system_prompt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::remove_var("OPENAI_BASE_URL");
        env::remove_var("MODEL");
        env::remove_var("LLM_TIMEOUT_SECS");
        env::remove_var("LLM_SYSTEM_PROMPT");

        let config = EnvLlmConfig::from_env().unwrap();

        assert_eq!(config.api_key(), "sk-test");
        assert_eq!(config.base_url(), "https://api.openai.com/v1");
        assert_eq!(config.model(), "gpt-3.5-turbo");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(config.system_prompt().is_none());
    }

    #[test]
    #[serial]
    fn test_from_env_missing_key_is_err() {
        env::remove_var("OPENAI_API_KEY");
        assert!(EnvLlmConfig::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_blank_system_prompt_is_none() {
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("LLM_SYSTEM_PROMPT", "   ");
        env::set_var("LLM_TIMEOUT_SECS", "15");

        let config = EnvLlmConfig::from_env().unwrap();

        assert!(config.system_prompt().is_none());
        assert_eq!(config.timeout(), Duration::from_secs(15));
        env::remove_var("LLM_SYSTEM_PROMPT");
        env::remove_var("LLM_TIMEOUT_SECS");
    }
}

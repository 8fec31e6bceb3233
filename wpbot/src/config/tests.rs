//! Config tests.

use crate::config::bot_config::BotConfig;
use content_generator::Model;
use llm_client::LlmConfig;
use serial_test::serial;
use std::env;
use std::time::Duration;
use wordpress_client::AuthScheme;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "WEBHOOK_URL",
    "PORT",
    "LOG_FILE",
    "ALLOWED_USER_IDS",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "MODEL",
    "LLM_TIMEOUT_SECS",
    "LLM_SYSTEM_PROMPT",
    "GENERATION_WORD_LIMIT",
    "SELECT_MODEL",
    "WORDPRESS_URL",
    "WORDPRESS_USER",
    "WORDPRESS_PASSWORD",
    "WORDPRESS_AUTH",
    "WORDPRESS_TIMEOUT_SECS",
];

fn set_required() {
    for var in VARS {
        env::remove_var(var);
    }
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("OPENAI_API_KEY", "test_key");
    env::set_var("WORDPRESS_URL", "https://blog.example.com/");
    env::set_var("WORDPRESS_USER", "editor");
    env::set_var("WORDPRESS_PASSWORD", "app-pass");
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    set_required();

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert!(config.webhook_url().is_none());
    assert_eq!(config.log_file(), "logs/wpbot.log");
    assert!(config.base().allowed_user_ids.is_empty());
    assert_eq!(config.base().telegram.port, 8080);
    assert_eq!(config.llm.base_url(), "https://api.openai.com/v1");
    assert_eq!(config.llm.model(), "gpt-3.5-turbo");
    assert_eq!(config.generator.word_limit, 700);
    assert_eq!(config.generator.timeout, Duration::from_secs(60));
    assert_eq!(config.wordpress.site_url, "https://blog.example.com");
    assert_eq!(config.wordpress.auth.scheme, AuthScheme::Basic);
    assert_eq!(config.wordpress.timeout, Duration::from_secs(30));
    assert!(config.conversation.select_model);
    assert_eq!(config.conversation.default_model, Model::Gpt35Turbo);
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    set_required();
    env::set_var("TELEGRAM_API_URL", "http://localhost:8081");
    env::set_var("WEBHOOK_URL", "https://bot.example.com/hook");
    env::set_var("PORT", "8443");
    env::set_var("LOG_FILE", "/tmp/wpbot-test.log");
    env::set_var("ALLOWED_USER_IDS", "1, 2,3");
    env::set_var("MODEL", "gpt-4-turbo");
    env::set_var("LLM_TIMEOUT_SECS", "20");
    env::set_var("GENERATION_WORD_LIMIT", "300");
    env::set_var("SELECT_MODEL", "false");
    env::set_var("WORDPRESS_AUTH", "JWT");
    env::set_var("WORDPRESS_TIMEOUT_SECS", "5");

    let config = BotConfig::load(Some("cli_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "cli_token");
    assert_eq!(config.telegram_api_url(), Some("http://localhost:8081"));
    assert_eq!(config.webhook_url(), Some("https://bot.example.com/hook"));
    assert_eq!(config.base().telegram.port, 8443);
    assert_eq!(config.log_file(), "/tmp/wpbot-test.log");
    assert_eq!(config.base().allowed_user_ids, vec![1, 2, 3]);
    assert_eq!(config.generator.word_limit, 300);
    assert_eq!(config.generator.timeout, Duration::from_secs(20));
    assert!(!config.conversation.select_model);
    assert_eq!(config.conversation.default_model, Model::Gpt4Turbo);
    assert_eq!(config.wordpress.auth.scheme, AuthScheme::Jwt);
    assert_eq!(config.wordpress.timeout, Duration::from_secs(5));
    assert!(config.validate().is_ok());

    set_required();
}

#[test]
#[serial]
fn test_load_config_missing_wordpress() {
    set_required();
    env::remove_var("WORDPRESS_URL");
    assert!(BotConfig::load(None).is_err());
    set_required();
}

#[test]
#[serial]
fn test_load_config_rejects_bad_allowlist() {
    set_required();
    env::set_var("ALLOWED_USER_IDS", "1,alice");
    assert!(BotConfig::load(None).is_err());
    set_required();
}

#[test]
#[serial]
fn test_validate_telegram_api_url_invalid() {
    set_required();
    env::set_var("TELEGRAM_API_URL", "not a url");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());
    set_required();
}

#[test]
#[serial]
fn test_validate_wordpress_url_invalid() {
    set_required();
    env::set_var("WORDPRESS_URL", "ftp://blog.example.com");
    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());
    set_required();
}

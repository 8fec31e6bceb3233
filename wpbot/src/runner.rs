//! Entry points: run the bot, or generate a single draft from the command line.

use anyhow::{Context, Result};
use content_generator::{Draft, GenerationRequest, GeneratorConfig, Model};
use llm_client::{EnvLlmConfig, LlmConfig};
use std::sync::Arc;
use tracing::{info, instrument};
use wpbot_core::{init_tracing, Bot};
use wpbot_telegram::{build_bot, run_dispatcher, TelegramBotAdapter};

use crate::components::{build_generator, build_handler_chain, build_machine, BotComponents};
use crate::config::BotConfig;

/// Main entry: validate config, init logging, build components and the handler chain, then run
/// the dispatcher until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    let BotConfig {
        base,
        llm,
        generator,
        wordpress,
        conversation,
    } = config;

    info!(
        webhook = base.telegram.webhook_url.is_some(),
        log_file = %base.log_file,
        "Initializing bot"
    );

    let teloxide_bot = build_bot(&base.telegram)?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let generator = build_generator(&llm, generator);
    let machine = build_machine(generator, wordpress, conversation)?;
    let components = BotComponents { bot, machine };
    let handler_chain = build_handler_chain(&base, &components);

    info!("Bot started successfully");

    run_dispatcher(teloxide_bot, handler_chain, &base.telegram).await
}

/// Generates one draft for `topic` with `model` (or MODEL). Needs only the OpenAI settings.
pub async fn generate_once(topic: &str, model: Option<&str>) -> Result<Draft> {
    let llm = EnvLlmConfig::from_env()?;
    let model = Model::parse(model.unwrap_or(llm.model())).context("Unknown model")?;
    let generator = build_generator(&llm, GeneratorConfig::from_env(&llm));
    let draft = generator
        .generate(&GenerationRequest::new(topic, model))
        .await;
    if draft.is_fallback() {
        anyhow::bail!("Generation failed for topic {:?}; see the log for the cause", topic);
    }
    Ok(draft)
}

//! Component factory: builds the generator, publisher, conversation machine and handler chain
//! from config. Isolates assembly logic from the runner.

use anyhow::Result;
use content_generator::{ContentGenerator, GeneratorConfig, LlmContentGenerator};
use conversation::{
    ConversationHandler, ConversationMachine, ConversationSettings, InMemorySessionStore,
};
use handler_chain::HandlerChain;
use llm_client::{EnvLlmConfig, LlmClient, LlmConfig, OpenAILlmClient};
use openai_client::mask_token;
use std::sync::Arc;
use tracing::{info, instrument};
use wordpress_client::{Publisher, WordPressClient, WordPressConfig};
use wpbot_core::Bot;

use crate::config::BaseConfig;
use crate::handlers::{AuthHandler, LoggingHandler};

/// Parts the runner wires into the dispatcher.
#[derive(Clone)]
pub struct BotComponents {
    pub bot: Arc<dyn Bot>,
    pub machine: Arc<ConversationMachine>,
}

/// OpenAI-backed content generator.
#[instrument(skip(llm, generator))]
pub fn build_generator(llm: &EnvLlmConfig, generator: GeneratorConfig) -> Arc<dyn ContentGenerator> {
    info!(
        base_url = %llm.base_url(),
        api_key = %mask_token(llm.api_key()),
        word_limit = generator.word_limit,
        timeout_secs = generator.timeout.as_secs(),
        "Building content generator"
    );
    let client: Arc<dyn LlmClient> = Arc::new(
        OpenAILlmClient::with_base_url(llm.api_key().to_string(), llm.base_url().to_string())
            .with_system_prompt_opt(llm.system_prompt().map(str::to_string)),
    );
    Arc::new(LlmContentGenerator::new(client, generator))
}

/// Conversation machine over an in-memory session store.
#[instrument(skip(generator, wordpress, settings))]
pub fn build_machine(
    generator: Arc<dyn ContentGenerator>,
    wordpress: WordPressConfig,
    settings: ConversationSettings,
) -> Result<Arc<ConversationMachine>> {
    info!(
        site_url = %wordpress.site_url,
        auth = %wordpress.auth.scheme,
        select_model = settings.select_model,
        default_model = %settings.default_model,
        "Building conversation machine"
    );
    let publisher: Arc<dyn Publisher> = Arc::new(WordPressClient::new(wordpress)?);
    Ok(Arc::new(ConversationMachine::new(
        Arc::new(InMemorySessionStore::new()),
        generator,
        publisher,
        settings,
    )))
}

/// Logging first, then the allowlist when configured, then the conversation.
pub fn build_handler_chain(base: &BaseConfig, components: &BotComponents) -> HandlerChain {
    let mut chain = HandlerChain::new().add_handler(Arc::new(LoggingHandler));
    if !base.allowed_user_ids.is_empty() {
        info!(count = base.allowed_user_ids.len(), "User allowlist enabled");
        chain = chain.add_handler(Arc::new(AuthHandler::new(base.allowed_user_ids.clone())));
    }
    chain.add_handler(Arc::new(ConversationHandler::new(
        components.machine.clone(),
        components.bot.clone(),
    )))
}

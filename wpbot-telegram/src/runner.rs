//! Dispatcher: converts teloxide updates to core events and hands them to the HandlerChain.
//! Long polling by default; a webhook listener when WEBHOOK_URL is configured.

use anyhow::{Context, Result};
use handler_chain::HandlerChain;
use teloxide::{
    error_handlers::LoggingErrorHandler,
    prelude::*,
    update_listeners::webhooks,
    utils::command::BotCommands,
};
use tracing::{error, info, instrument, warn};
use wpbot_core::{Event, ToCoreEvent};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use super::config::TelegramConfig;

/// Commands registered with Telegram at startup.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Commands:")]
pub enum Command {
    #[command(description = "start writing a new post")]
    Start,
    #[command(description = "drop the post in progress")]
    Cancel,
    #[command(description = "show usage")]
    Help,
}

/// Creates the teloxide Bot, pointing it at TELEGRAM_API_URL when set.
pub fn build_bot(config: &TelegramConfig) -> Result<Bot> {
    let bot = Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

async fn dispatch_event(chain: &HandlerChain, event: Event) {
    info!(
        user_id = event.user.id,
        chat_id = event.chat.id,
        kind = event.kind_name(),
        "step: processing event (handler chain started)"
    );
    if let Err(e) = chain.handle(&event).await {
        error!(error = %e, user_id = event.user.id, "Handler chain failed");
    }
}

/// Registers the commands and runs the dispatcher until shutdown (Ctrl-C).
/// Updates of one chat are handled in order; different chats run concurrently.
#[instrument(skip(bot, handler_chain, config))]
pub async fn run_dispatcher(
    bot: Bot,
    handler_chain: HandlerChain,
    config: &TelegramConfig,
) -> Result<()> {
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Connected to Telegram");
        }
    }

    let message_chain = handler_chain.clone();
    let callback_chain = handler_chain;
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(move |msg: Message| {
            let chain = message_chain.clone();
            async move {
                let event = TelegramMessageWrapper(&msg).to_core();
                dispatch_event(&chain, event).await;
                respond(())
            }
        }))
        .branch(
            Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
                let chain = callback_chain.clone();
                async move {
                    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
                        warn!(error = %e, "Failed to answer callback query");
                    }
                    let event = TelegramCallbackWrapper(&q).to_core();
                    dispatch_event(&chain, event).await;
                    respond(())
                }
            }),
        );

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .default_handler(|_| async {})
        .enable_ctrlc_handler()
        .build();

    match config.webhook_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid WEBHOOK_URL: {}", url_str))?;
            let address = config.listen_address();
            info!(%address, url = %url, "Starting webhook listener");
            let listener = webhooks::axum(bot, webhooks::Options::new(address, url))
                .await
                .context("Failed to start webhook listener")?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
        None => {
            info!("Starting long polling");
            dispatcher.dispatch().await;
        }
    }

    Ok(())
}

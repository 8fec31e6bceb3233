//! [`Handler`] that feeds chat events into the [`ConversationMachine`] and sends its replies.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};
use wpbot_core::{Bot, Event, Handler, HandlerResponse, Result};

use crate::machine::ConversationMachine;
use crate::progress::ChatProgress;
use crate::trigger::Trigger;

pub struct ConversationHandler {
    machine: Arc<ConversationMachine>,
    bot: Arc<dyn Bot>,
}

impl ConversationHandler {
    pub fn new(machine: Arc<ConversationMachine>, bot: Arc<dyn Bot>) -> Self {
        Self { machine, bot }
    }
}

#[async_trait]
impl Handler for ConversationHandler {
    #[instrument(skip(self, event), fields(user_id = event.user.id, chat_id = event.chat.id))]
    async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        let Some(trigger) = Trigger::from_event(&event.kind) else {
            debug!(kind = event.kind_name(), "Ignoring event");
            return Ok(HandlerResponse::Ignore);
        };

        let progress = ChatProgress::new(self.bot.clone(), event.chat.clone());
        let replies = self.machine.handle(event.user.id, trigger, &progress).await?;

        let mut last = None;
        for reply in replies {
            self.bot.send_reply(&event.chat, &reply).await?;
            last = Some(reply.text);
        }
        Ok(last.map(HandlerResponse::Reply).unwrap_or(HandlerResponse::Stop))
    }
}

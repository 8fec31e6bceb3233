//! Progress notifications around long-running calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;
use wpbot_core::{Bot, Chat};

/// Long-running work the machine reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Generating,
    Revising,
    Publishing,
}

impl Task {
    fn started_text(self) -> &'static str {
        match self {
            Task::Generating => "⏳ Generating…",
            Task::Revising => "⏳ Applying your suggestions…",
            Task::Publishing => "⏳ Sending to WordPress…",
        }
    }

    fn finished_text(self, ok: bool) -> &'static str {
        match (self, ok) {
            (Task::Publishing, true) => "✅ Sent.",
            (_, true) => "✅ Done.",
            (_, false) => "⚠️ Failed.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    Started(Task),
    Succeeded(Task),
    Failed(Task),
}

/// Receives checkpoints. Must not fail the transition it reports on.
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    async fn report(&self, checkpoint: Checkpoint);
}

/// Shows progress in the chat: one status message, sent on start and edited on completion.
pub struct ChatProgress {
    bot: Arc<dyn Bot>,
    chat: Chat,
    message_id: Mutex<Option<String>>,
}

impl ChatProgress {
    pub fn new(bot: Arc<dyn Bot>, chat: Chat) -> Self {
        Self {
            bot,
            chat,
            message_id: Mutex::new(None),
        }
    }

    async fn finish(&self, task: Task, ok: bool) {
        let text = task.finished_text(ok);
        let Some(id) = self.message_id.lock().await.take() else {
            return;
        };
        if let Err(e) = self.bot.edit_message(&self.chat, &id, text).await {
            warn!(chat_id = self.chat.id, error = %e, "Failed to update progress message");
        }
    }
}

#[async_trait]
impl ProgressReporter for ChatProgress {
    async fn report(&self, checkpoint: Checkpoint) {
        match checkpoint {
            Checkpoint::Started(task) => {
                match self
                    .bot
                    .send_message_and_return_id(&self.chat, task.started_text())
                    .await
                {
                    Ok(id) => *self.message_id.lock().await = Some(id),
                    Err(e) => {
                        warn!(chat_id = self.chat.id, error = %e, "Failed to send progress message")
                    }
                }
            }
            Checkpoint::Succeeded(task) => self.finish(task, true).await,
            Checkpoint::Failed(task) => self.finish(task, false).await,
        }
    }
}

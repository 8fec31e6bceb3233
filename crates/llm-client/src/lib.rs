//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI implementation. The model is chosen per call
//! because each conversation selects its own model.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};
use prompt::{ChatMessage, MessageRole};

mod config;
mod openai_llm;

pub use config::{EnvLlmConfig, LlmConfig};
pub use openai_llm::OpenAILlmClient;

/// LLM client interface: completion from a list of role messages with an explicit model.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages.
    async fn complete(&self, model: &str, messages: Vec<ChatMessage>) -> Result<String>;
}

/// True for models served only by the legacy completions endpoint (e.g. `gpt-3.5-turbo-instruct`).
pub fn is_completion_model(model: &str) -> bool {
    model.contains("instruct")
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_completion_model() {
        assert!(is_completion_model("gpt-3.5-turbo-instruct"));
        assert!(!is_completion_model("gpt-3.5-turbo"));
        assert!(!is_completion_model("gpt-4-turbo"));
    }

    #[test]
    fn test_chat_message_to_openai_roles() {
        for msg in [
            ChatMessage::system("s"),
            ChatMessage::user("u"),
            ChatMessage::assistant("a"),
        ] {
            let converted = chat_message_to_openai(&msg).unwrap();
            let matches_role = matches!(
                (&msg.role, &converted),
                (MessageRole::System, ChatCompletionRequestMessage::System(_))
                    | (MessageRole::User, ChatCompletionRequestMessage::User(_))
                    | (MessageRole::Assistant, ChatCompletionRequestMessage::Assistant(_))
            );
            assert!(matches_role, "role {:?} converted wrongly", msg.role);
        }
    }
}

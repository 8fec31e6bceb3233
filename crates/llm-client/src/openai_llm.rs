//! OpenAI implementation of [`LlmClient`]: chat models go to chat completions, instruct models to
//! the legacy completions endpoint with the flattened prompt.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::CompletionOptions;
use prompt::ChatMessage;
use tracing::{info, instrument};

use super::{chat_message_to_openai, is_completion_model, LlmClient};

/// [`LlmClient`] backed by openai-client.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    completion_options: CompletionOptions,
    system_prompt: Option<String>,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::new(api_key),
            completion_options: CompletionOptions::default(),
            system_prompt: None,
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            completion_options: CompletionOptions::default(),
            system_prompt: None,
        }
    }

    /// Extra system message prepended to every request (before the prompt's own messages).
    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    fn with_system(&self, messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
        match &self.system_prompt {
            Some(system) => std::iter::once(ChatMessage::system(system.clone()))
                .chain(messages)
                .collect(),
            None => messages,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages))]
    async fn complete(&self, model: &str, messages: Vec<ChatMessage>) -> Result<String> {
        let messages = self.with_system(messages);
        if is_completion_model(model) {
            info!(model = %model, "Routing to completions endpoint");
            let prompt = prompt::flatten_for_completion(&messages);
            return self
                .client
                .completion(model, prompt, self.completion_options)
                .await;
        }
        let openai_messages = messages
            .iter()
            .map(chat_message_to_openai)
            .collect::<Result<Vec<_>>>()?;
        self.client.chat_completion(model, openai_messages).await
    }
}

//! The [`ContentGenerator`] seam and its language-model implementation.

use async_trait::async_trait;
use llm_client::{LlmClient, LlmConfig};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::draft::Draft;
use crate::model::Model;
use crate::sanitize::parse_draft;

/// Previous body plus the user's requested changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub prior_body: String,
    pub suggestion: String,
}

/// Input of one generation: a fresh article when `revision` is `None`, a rewrite otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub model: Model,
    pub revision: Option<Revision>,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, model: Model) -> Self {
        Self {
            topic: topic.into(),
            model,
            revision: None,
        }
    }

    pub fn revise(
        topic: impl Into<String>,
        model: Model,
        prior_body: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            model,
            revision: Some(Revision {
                prior_body: prior_body.into(),
                suggestion: suggestion.into(),
            }),
        }
    }
}

/// Produces drafts. Implementations absorb every failure into [`Draft::fallback`].
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Draft;
}

/// Word limit and per-call timeout for [`LlmContentGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub word_limit: usize,
    pub timeout: Duration,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            word_limit: prompt::DEFAULT_WORD_LIMIT,
            timeout: Duration::from_secs(60),
        }
    }
}

impl GeneratorConfig {
    /// Reads `GENERATION_WORD_LIMIT` (default 700); the timeout comes from the LLM config.
    pub fn from_env(llm: &dyn LlmConfig) -> Self {
        let word_limit = env::var("GENERATION_WORD_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(prompt::DEFAULT_WORD_LIMIT);
        Self {
            word_limit,
            timeout: llm.timeout(),
        }
    }
}

/// [`ContentGenerator`] that prompts an [`LlmClient`] for a JSON answer.
pub struct LlmContentGenerator {
    llm: Arc<dyn LlmClient>,
    config: GeneratorConfig,
}

impl LlmContentGenerator {
    pub fn new(llm: Arc<dyn LlmClient>, config: GeneratorConfig) -> Self {
        Self { llm, config }
    }
}

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    #[instrument(skip(self, request), fields(model = %request.model, revision = request.revision.is_some()))]
    async fn generate(&self, request: &GenerationRequest) -> Draft {
        let messages = match &request.revision {
            None => prompt::generation_messages(&request.topic, self.config.word_limit),
            Some(revision) => prompt::revision_messages(
                &request.topic,
                &revision.prior_body,
                &revision.suggestion,
                self.config.word_limit,
            ),
        };

        let model_id = request.model.id();
        let call = self.llm.complete(&model_id, messages);
        let raw = match tokio::time::timeout(self.config.timeout, call).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(e)) => {
                error!(error = %e, "LLM request failed; returning fallback draft");
                return Draft::fallback();
            }
            Err(_) => {
                warn!(
                    timeout_secs = self.config.timeout.as_secs(),
                    "LLM request timed out; returning fallback draft"
                );
                return Draft::fallback();
            }
        };

        match parse_draft(&raw) {
            Ok(draft) => {
                info!(
                    title = %draft.title,
                    words = draft.word_count(),
                    "Draft generated"
                );
                draft
            }
            Err(e) => {
                warn!(error = %e, raw_len = raw.len(), "Malformed model output; returning fallback draft");
                Draft::fallback()
            }
        }
    }
}

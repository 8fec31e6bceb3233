//! # Prompt
//!
//! Chat message types and the prompts used to write blog posts.
//!
//! ## Prompts
//!
//! - **Generation**: system instruction + one user message asking for an article about a topic,
//!   answered as a JSON object `{"title": ..., "content": ...}` within a word limit.
//! - **Revision**: same contract, embedding the previous body and the user's suggestion.
//! - **Completion**: [`flatten_for_completion`] turns role messages into one prompt string for
//!   models served by the legacy completions endpoint.
//!
//! ## External interactions
//!
//! - **AI models**: output is sent to the OpenAI API by llm-client.

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

impl MessageRole {
    /// Prefix used when messages are flattened into a single prompt.
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::System => "System",
            MessageRole::User => "User",
            MessageRole::Assistant => "Assistant",
        }
    }
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// System instruction shared by generation and revision prompts.
pub const BLOG_SYSTEM_MESSAGE: &str =
    "You are an expert blog writer. You always answer with a single JSON object and nothing else.";

/// Default upper bound on article length, in words.
pub const DEFAULT_WORD_LIMIT: usize = 700;

/// Describes the JSON answer shape expected from the model.
fn answer_format(word_limit: usize) -> String {
    format!(
        "Answer only with a JSON object with two string fields: \"title\" (an attractive post title) \
         and \"content\" (the article body as plain text, paragraphs separated by blank lines, \
         no HTML and no Markdown). The content must have at most {} words.",
        word_limit
    )
}

/// Messages asking the model for a new article about `topic`.
pub fn generation_messages(topic: &str, word_limit: usize) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(BLOG_SYSTEM_MESSAGE),
        ChatMessage::user(format!(
            "Write a blog article about: {}\n\n{}",
            topic.trim(),
            answer_format(word_limit)
        )),
    ]
}

/// Messages asking the model to rewrite `prior_body` applying the user's `suggestion`.
pub fn revision_messages(
    topic: &str,
    prior_body: &str,
    suggestion: &str,
    word_limit: usize,
) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(BLOG_SYSTEM_MESSAGE),
        ChatMessage::user(format!(
            "Here is a blog article about: {}\n\n---\n{}\n---\n\n\
             Rewrite it applying these suggestions from the author: {}\n\n\
             Keep everything the suggestions do not ask to change.\n\n{}",
            topic.trim(),
            prior_body.trim(),
            suggestion.trim(),
            answer_format(word_limit)
        )),
    ]
}

/// Joins messages as `Role: content` blocks for completion-style models.
///
/// Ends with `Assistant:` so the model continues as the assistant.
pub fn flatten_for_completion(messages: &[ChatMessage]) -> String {
    let mut out = String::new();
    for msg in messages {
        out.push_str(msg.role.label());
        out.push_str(": ");
        out.push_str(&msg.content);
        out.push_str("\n\n");
    }
    out.push_str("Assistant:");
    out
}

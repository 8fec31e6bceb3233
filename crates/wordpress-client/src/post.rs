//! Post request/response types and the [`Publisher`] trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// WordPress post status sent on creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Publish,
}

/// Body of `POST /wp/v2/posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub status: PostStatus,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, status: PostStatus) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            status,
        }
    }
}

/// The part of WordPress' 201 response the bot uses. `id` is `None` when the post was created
/// but the response body could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedPost {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Why a post was not created. `status_code` is `None` when no HTTP response was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishFailure {
    pub status_code: Option<u16>,
    pub detail: String,
}

impl std::fmt::Display for PublishFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "HTTP {}: {}", code, self.detail),
            None => write!(f, "{}", self.detail),
        }
    }
}

/// Outcome of one publish attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishResult {
    Created(CreatedPost),
    Failed(PublishFailure),
}

impl PublishResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PublishResult::Created(_))
    }
}

/// Creates posts on a blogging platform.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Makes exactly one attempt to create the post.
    async fn publish(&self, post: &NewPost) -> PublishResult;
}

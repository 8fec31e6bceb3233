//! [`Publisher`] over the WordPress REST API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

use crate::config::{AuthScheme, WordPressAuth, WordPressConfig};
use crate::post::{CreatedPost, NewPost, PublishFailure, PublishResult, Publisher};

const POSTS_PATH: &str = "/wp-json/wp/v2/posts";
const JWT_TOKEN_PATH: &str = "/wp-json/jwt-auth/v1/token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    token: Option<String>,
}

/// WordPress REST client bound to one site and one set of credentials.
pub struct WordPressClient {
    http: reqwest::Client,
    site_url: String,
    auth: WordPressAuth,
}

impl WordPressClient {
    /// Builds the HTTP client with the configured request timeout.
    pub fn new(config: WordPressConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build WordPress HTTP client")?;
        Ok(Self {
            http,
            site_url: config.site_url.trim_end_matches('/').to_string(),
            auth: config.auth,
        })
    }

    pub fn posts_url(&self) -> String {
        format!("{}{}", self.site_url, POSTS_PATH)
    }

    fn token_url(&self) -> String {
        format!("{}{}", self.site_url, JWT_TOKEN_PATH)
    }

    /// Exchanges username/password for a JWT at the token endpoint.
    async fn fetch_token(&self) -> std::result::Result<String, PublishFailure> {
        let response = self
            .http
            .post(self.token_url())
            .json(&serde_json::json!({
                "username": self.auth.username,
                "password": self.auth.password.expose_secret(),
            }))
            .send()
            .await
            .map_err(|e| PublishFailure {
                status_code: None,
                detail: format!("token request failed: {}", e),
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(PublishFailure {
                status_code: Some(status.as_u16()),
                detail: body,
            });
        }
        serde_json::from_str::<TokenResponse>(&body)
            .ok()
            .and_then(|t| t.token)
            .filter(|t| !t.is_empty())
            .ok_or(PublishFailure {
                status_code: Some(status.as_u16()),
                detail: format!("token endpoint returned no token: {}", body),
            })
    }

    async fn authorized_request(
        &self,
        post: &NewPost,
    ) -> std::result::Result<reqwest::RequestBuilder, PublishFailure> {
        let request = self.http.post(self.posts_url()).json(post);
        Ok(match self.auth.scheme {
            AuthScheme::Basic => request.basic_auth(
                &self.auth.username,
                Some(self.auth.password.expose_secret()),
            ),
            AuthScheme::Jwt => request.bearer_auth(self.fetch_token().await?),
        })
    }
}

#[async_trait]
impl Publisher for WordPressClient {
    #[instrument(skip(self, post), fields(status = %post.status, scheme = %self.auth.scheme))]
    async fn publish(&self, post: &NewPost) -> PublishResult {
        let request = match self.authorized_request(post).await {
            Ok(request) => request,
            Err(failure) => {
                error!(failure = %failure, "WordPress authentication failed");
                return PublishResult::Failed(failure);
            }
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "WordPress request failed");
                return PublishResult::Failed(PublishFailure {
                    status_code: None,
                    detail: e.to_string(),
                });
            }
        };

        let status = response.status();
        if status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "WordPress rejected the post");
            return PublishResult::Failed(PublishFailure {
                status_code: Some(status.as_u16()),
                detail: body,
            });
        }

        // The post exists from here on; an unreadable body only loses the id and link.
        let created = match response.json::<CreatedPost>().await {
            Ok(created) => created,
            Err(e) => {
                warn!(error = %e, "WordPress 201 response body unreadable; post id unknown");
                CreatedPost::default()
            }
        };
        info!(post_id = ?created.id, link = ?created.link, "WordPress post created");
        PublishResult::Created(created)
    }
}

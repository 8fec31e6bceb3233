//! Handlers for logging and optional auth (allowlist).

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};
use wpbot_core::{Event, EventKind, Handler, HandlerError, HandlerResponse, Result};

/// Logs each event in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        let detail = match &event.kind {
            EventKind::Text(text) => text.as_str(),
            EventKind::Command { name, .. } => name.as_str(),
            EventKind::Callback { data, .. } => data.as_str(),
            EventKind::Unsupported => "",
        };
        info!(
            user_id = event.user.id,
            chat_id = event.chat.id,
            username = %event.user.username.as_deref().unwrap_or("unknown"),
            kind = event.kind_name(),
            detail = %detail,
            "Received event"
        );
        Ok(true)
    }

    #[instrument(skip(self, event, response))]
    async fn after(&self, event: &Event, response: &HandlerResponse) -> Result<()> {
        debug!(
            event_id = %event.id,
            response = ?response,
            "Processed event"
        );
        Ok(())
    }
}

/// Stops the chain with Unauthorized if the user id is not in the allowlist.
pub struct AuthHandler {
    allowed_users: Vec<i64>,
}

impl AuthHandler {
    /// Creates a handler that allows only the given user ids.
    pub fn new(allowed_users: Vec<i64>) -> Self {
        Self { allowed_users }
    }
}

#[async_trait]
impl Handler for AuthHandler {
    #[instrument(skip(self, event))]
    async fn before(&self, event: &Event) -> Result<bool> {
        let user_id = event.user.id;
        if self.allowed_users.contains(&user_id) {
            debug!(user_id = user_id, "User authorized");
            Ok(true)
        } else {
            warn!(user_id = user_id, "Unauthorized access attempt");
            Err(HandlerError::Unauthorized.into())
        }
    }
}

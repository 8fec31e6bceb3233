//! # Handler chain
//!
//! Runs a sequence of handlers for each inbound event. Every handler's `before` runs in order and
//! may stop the chain; the first handler whose `handle` returns Stop or Reply ends the handle
//! phase; `after` callbacks run in reverse order with the final response.

use std::sync::Arc;
use tracing::{debug, info, instrument};
use wpbot_core::{Event, Handler, HandlerResponse, Result};

/// Ordered list of handlers sharing one before/handle/after pass per event.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Stop/Reply ends handler phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs before, handle and after phases. Returns the first Stop or Reply, or Continue.
    #[instrument(skip(self, event), fields(user_id = event.user.id, chat_id = event.chat.id))]
    pub async fn handle(&self, event: &Event) -> Result<HandlerResponse> {
        info!(
            event_id = %event.id,
            kind = event.kind_name(),
            "step: handler_chain started"
        );

        for handler in &self.handlers {
            let name = std::any::type_name_of_val(handler.as_ref());
            if !handler.before(event).await? {
                info!(handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for handler in &self.handlers {
            let name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(event).await?;
            debug!(handler = %name, response = ?response, "Handler processed");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    info!(handler = %name, "step: handler chain stopped by handler");
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(event, &final_response).await?;
        }

        info!(event_id = %event.id, "step: handler_chain finished");
        Ok(final_response)
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs

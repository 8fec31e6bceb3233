//! Chain handlers that run in front of the conversation: logging and the optional allowlist.

mod logging_auth;

pub use logging_auth::{AuthHandler, LoggingHandler};

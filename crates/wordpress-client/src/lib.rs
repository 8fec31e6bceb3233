//! # WordPress client
//!
//! The [`Publisher`] seam and its WordPress REST implementation. One attempt per call, no retry;
//! every failure (transport, auth, non-201 status, unreadable body) comes back as
//! [`PublishResult::Failed`] carrying the raw detail.

mod client;
mod config;
pub mod format;
mod post;

pub use client::WordPressClient;
pub use config::{AuthScheme, WordPressAuth, WordPressConfig};
pub use post::{CreatedPost, NewPost, PostStatus, PublishFailure, PublishResult, Publisher};

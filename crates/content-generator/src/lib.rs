//! # Content generator
//!
//! Turns a topic into a blog [`Draft`] by prompting a language model for a JSON object
//! `{"title", "content"}`. Failures never escape: malformed output, upstream errors and timeouts
//! all yield [`Draft::fallback`]. Bodies are tag-stripped before use, and [`diff`] marks the words
//! a revision added.

pub mod diff;
mod draft;
mod generator;
mod model;
pub mod sanitize;

pub use diff::{highlight_additions, DiffWord};
pub use draft::{Draft, FALLBACK_BODY, FALLBACK_TITLE};
pub use generator::{
    ContentGenerator, GenerationRequest, GeneratorConfig, LlmContentGenerator, Revision,
};
pub use model::{Model, UnknownModel};
pub use sanitize::{clean_response_json, parse_draft, strip_tags, ParseError};

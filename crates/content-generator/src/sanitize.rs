//! Cleaning and parsing of raw model output.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::draft::Draft;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<>]*>").expect("valid tag regex"));
static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[A-Za-z]*\s*").expect("valid fence regex"));
static CLOSING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*```$").expect("valid fence regex"));

/// Title used when the model answered with content but no title.
pub const UNTITLED: &str = "Untitled post";

/// Why a model answer could not become a [`Draft`].
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object in model output")]
    NoJson,

    #[error("invalid JSON in model output: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("model output has no content")]
    EmptyContent,
}

#[derive(Debug, Deserialize)]
struct RawDraft {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

/// Removes every `<...>` tag, repeating until none is left, so the result is a fixpoint:
/// `strip_tags(&strip_tags(s)) == strip_tags(s)`.
pub fn strip_tags(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = TAG.replace_all(&current, "").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Strips a Markdown code fence (```` ```json ... ``` ````) wrapped around the answer.
pub fn clean_response_json(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    let without_open = OPENING_FENCE.replace(trimmed, "");
    CLOSING_FENCE.replace(&without_open, "").trim().to_string()
}

/// Parses a model answer into a sanitized [`Draft`].
///
/// Tries the whole (fence-stripped) text first, then the first complete `{ ... }` value found
/// from each `{` in turn; trailing prose after that value is ignored. Blank titles become
/// [`UNTITLED`]; a blank body after tag stripping is an error.
pub fn parse_draft(raw: &str) -> Result<Draft, ParseError> {
    let cleaned = clean_response_json(raw);
    let parsed = match serde_json::from_str::<RawDraft>(&cleaned) {
        Ok(parsed) => parsed,
        Err(whole_err) => first_embedded_object(&cleaned, whole_err)?,
    };

    let body = strip_tags(parsed.content.as_deref().unwrap_or("")).trim().to_string();
    if body.is_empty() {
        return Err(ParseError::EmptyContent);
    }
    let title = strip_tags(parsed.title.as_deref().unwrap_or(""))
        .replace('"', "")
        .trim()
        .to_string();
    let title = if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title
    };
    Ok(Draft { title, body })
}

/// Scans `text` for the first `{` that starts a complete JSON object, preferring one that carries
/// `content`.
fn first_embedded_object(
    text: &str,
    whole_err: serde_json::Error,
) -> Result<RawDraft, ParseError> {
    let mut last_err = None;
    let mut without_content = None;
    for (start, _) in text.match_indices('{') {
        let mut values =
            serde_json::Deserializer::from_str(&text[start..]).into_iter::<RawDraft>();
        match values.next() {
            Some(Ok(candidate)) if candidate.content.is_some() => return Ok(candidate),
            Some(Ok(candidate)) => {
                without_content.get_or_insert(candidate);
            }
            Some(Err(err)) => last_err = Some(err),
            None => {}
        }
    }
    if let Some(candidate) = without_content {
        return Ok(candidate);
    }
    match last_err {
        Some(err) => Err(ParseError::InvalidJson(err)),
        None if text.contains('{') => Err(ParseError::InvalidJson(whole_err)),
        None => Err(ParseError::NoJson),
    }
}

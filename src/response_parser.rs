//! Extraction of code and JSON from model output
//!
//! Models wrap their answers in markdown fences more often than not. The
//! helpers here pull the payload out of the first fenced block and, for
//! `format_type: "json"`, parse what is left.

use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// First fenced block, optionally tagged `html`.
static CODE_FENCE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?s)```(?i:html)?[ \t]*\r?\n(.+?)\r?\n[ \t]*```").ok());

/// Fenced block with any language tag (`json`, `JSON`, none, ...).
static ANY_FENCE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)\r?\n?[ \t]*```").ok());

/// Helpers for turning raw completions into code and JSON values
pub struct ResponseParser;

impl ResponseParser {
    /// Code inside the first fenced block, trimmed.
    ///
    /// Without a fenced block the whole trimmed text is the code.
    ///
    /// ```rust
    /// use llm_arena::ResponseParser;
    ///
    /// let text = "Here you go:\n```html\n<p>hi</p>\n```\nEnjoy";
    /// assert_eq!(ResponseParser::extract_code(text), "<p>hi</p>");
    /// assert_eq!(ResponseParser::extract_code("  plain  "), "plain");
    /// ```
    pub fn extract_code(text: &str) -> String {
        match first_capture(&CODE_FENCE, text) {
            Some(code) => code.as_str().trim().to_string(),
            None => text.trim().to_string(),
        }
    }

    /// Remove leftover fence markers anywhere in `text`.
    pub fn strip_fence_markers(text: &str) -> String {
        text.replace("```html", "")
            .replace("```HTML", "")
            .replace("```", "")
            .trim()
            .to_string()
    }

    /// The contents of the first fenced block regardless of its language tag,
    /// or the trimmed text when there is none.
    pub fn strip_fences(text: &str) -> String {
        match first_capture(&ANY_FENCE, text) {
            Some(inner) => inner.as_str().trim().to_string(),
            None => text.trim().to_string(),
        }
    }

    /// Parse model output as JSON after stripping fences.
    ///
    /// No repair is attempted: the stripped text either parses or the call
    /// fails with [`LlmError::MalformedJson`].
    pub fn parse_json(raw: &str) -> LlmResult<Value> {
        let stripped = Self::strip_fences(raw);
        log_debug!(
            content_length = raw.len(),
            stripped_length = stripped.len(),
            "Parsing model output as JSON"
        );

        serde_json::from_str::<Value>(&stripped).map_err(|_| LlmError::malformed_json(stripped))
    }
}

fn first_capture<'t>(pattern: &Lazy<Option<Regex>>, text: &'t str) -> Option<regex::Match<'t>> {
    pattern
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|c| c.get(1))
}

//! Preview rendering for generated code
//!
//! Generated HTML is never inlined into the page. It is wrapped in a full
//! document, given a `<base>` so relative URLs (including `/api/llm`) resolve
//! against the arena, base64-encoded into a data URI and shown in a sandboxed
//! `<iframe>`. Rendering is pure string work and never fails.

use crate::response_parser::ResponseParser;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use html_escape::{encode_double_quoted_attribute, encode_safe};
use once_cell::sync::Lazy;
use regex::Regex;

static HEAD_TAG: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?i)<head(\s[^>]*)?>").ok());
static HTML_TAG: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?i)<html(\s[^>]*)?>").ok());

/// Sandbox flags of every preview frame. Top-level navigation and popups stay
/// disabled.
pub const SANDBOX_FLAGS: &str = "allow-scripts allow-same-origin";

/// Turns generated code into embeddable HTML fragments
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    base_url: String,
}

impl PreviewRenderer {
    /// `base_url` is written into `<base href="{base_url}/">`; a trailing
    /// slash is ignored.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Render `code` as a sandboxed iframe with an optional DOM id.
    ///
    /// ```rust
    /// use llm_arena::PreviewRenderer;
    ///
    /// let renderer = PreviewRenderer::new("http://localhost:7860");
    /// let frame = renderer.render("<p>hello</p>", Some("model_0_preview"));
    /// assert!(frame.contains(r#"id="model_0_preview""#));
    /// assert!(frame.contains("data:text/html;charset=utf-8;base64,"));
    /// ```
    pub fn render(&self, code: &str, frame_id: Option<&str>) -> String {
        let document = self.build_document(code);
        let data_uri = format!(
            "data:text/html;charset=utf-8;base64,{}",
            STANDARD.encode(document.as_bytes())
        );
        let id_attribute = match frame_id {
            Some(id) if !id.is_empty() => {
                format!(r#" id="{}""#, encode_double_quoted_attribute(id))
            }
            _ => String::new(),
        };

        format!(
            r#"<iframe{id_attribute} src="{data_uri}" style="width:100%;height:100%;min-height:400px;border:none;border-radius:4px;" sandbox="{SANDBOX_FLAGS}"></iframe>"#
        )
    }

    /// Error-style snippet shown in place of a preview.
    pub fn render_error(&self, message: &str) -> String {
        format!(
            "<div style='padding: 8px;color:red;'>{}</div>",
            encode_safe(message)
        )
    }

    /// The full HTML document a frame would display.
    ///
    /// Fence markers are removed; a fragment is wrapped in a minimal
    /// document; an existing document gets the `<base>` element inserted into
    /// its `<head>`, which is created when missing.
    pub fn build_document(&self, code: &str) -> String {
        let clean = ResponseParser::strip_fence_markers(code);
        let base_tag = format!(
            r#"<base href="{}/">"#,
            encode_double_quoted_attribute(&self.base_url)
        );

        if !clean.to_ascii_lowercase().contains("<html") {
            return format!(
                "<!DOCTYPE html>\n<html>\n  <head>\n    <meta charset=\"utf-8\">\n    {base_tag}\n  </head>\n  <body>\n    {clean}\n  </body>\n</html>"
            );
        }

        if let Some(head) = find_tag(&HEAD_TAG, &clean) {
            return splice(&clean, head, &format!("\n    {base_tag}"));
        }

        match find_tag(&HTML_TAG, &clean) {
            Some(html) => splice(
                &clean,
                html,
                &format!("\n  <head>\n    {base_tag}\n  </head>"),
            ),
            // `<html` appeared somewhere other than an opening tag
            None => format!("{base_tag}\n{clean}"),
        }
    }
}

/// Byte offset just past the first match of `pattern`.
fn find_tag(pattern: &Lazy<Option<Regex>>, text: &str) -> Option<usize> {
    pattern
        .as_ref()
        .and_then(|re| re.find(text))
        .map(|m| m.end())
}

fn splice(text: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..at]);
    out.push_str(insert);
    out.push_str(&text[at..]);
    out
}

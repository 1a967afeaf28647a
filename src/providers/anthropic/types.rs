//! Anthropic API request and response type definitions

use serde::{Deserialize, Serialize};

/// Extended thinking settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub(super) struct ThinkingConfig {
    #[serde(rename = "type")]
    pub thinking_type: String, // "enabled"
    pub budget_tokens: u32,
}

/// Anthropic Messages API request structure
#[derive(Debug, Serialize, Clone)]
pub(super) struct AnthropicRequest {
    pub model: String,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking: Option<ThinkingConfig>,
}

/// Anthropic message structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub(super) struct AnthropicMessage {
    pub role: String,
    pub content: String,
}

/// Anthropic content block structure
///
/// Only text is kept; thinking and any block type added later are skipped.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(tag = "type")]
pub(super) enum AnthropicContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}

/// Anthropic API response structure
#[derive(Debug, Deserialize, Serialize, Clone)]
pub(super) struct AnthropicResponse {
    #[serde(default)]
    pub content: Vec<AnthropicContentBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
    #[serde(default)]
    pub usage: Option<AnthropicUsage>,
}

impl AnthropicResponse {
    /// Concatenated text blocks.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|block| match block {
                AnthropicContentBlock::Text { text } => Some(text.as_str()),
                AnthropicContentBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Anthropic usage information
#[derive(Debug, Deserialize, Serialize, Clone)]
pub(super) struct AnthropicUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

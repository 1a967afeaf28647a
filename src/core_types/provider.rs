//! Provider trait for vendor adapters
//!
//! Defines the `ProviderAdapter` trait that all vendors implement. An adapter
//! only performs the vendor call; fence extraction, preview rendering and
//! error conversion happen once in [`crate::generation`].

use crate::error::LlmResult;
use async_trait::async_trait;

/// One vendor call: system prompt plus a single user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Vendor model name (the part after `provider:`)
    pub model: String,
    pub system_prompt: String,
    pub user_message: String,
}

impl CompletionRequest {
    pub fn new(
        model: impl Into<String>,
        system_prompt: impl Into<String>,
        user_message: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            system_prompt: system_prompt.into(),
            user_message: user_message.into(),
        }
    }
}

/// Trait for LLM vendors to implement
///
/// Implementations send exactly one request per call (no retries) and return
/// the assistant's text. A missing credential must surface as
/// [`LlmError::ConfigurationError`](crate::LlmError::ConfigurationError) from
/// `complete`, never from construction, so one unconfigured vendor does not
/// stop the others.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// Registry key, the `provider` half of `provider:model`
    fn provider_name(&self) -> &'static str;

    /// Human-readable vendor name used in error text (`OpenAI`, `Gemini`, ...)
    fn display_name(&self) -> &'static str;

    /// Whether a credential is configured
    fn is_configured(&self) -> bool;

    /// Send the request and return the raw completion text
    async fn complete(&self, request: CompletionRequest) -> LlmResult<String>;
}

//! DeepSeek provider implementation
//!
//! DeepSeek exposes an OpenAI-compatible chat completions API; model names
//! are passed through unchanged.

use super::openai_shared::{OpenAICompatibleClient, OpenAIMessage, OpenAIRequest};
use crate::config::{DeepSeekConfig, ProviderConfig};
use crate::core_types::{CompletionRequest, ProviderAdapter};
use crate::error::LlmResult;
use async_trait::async_trait;
use std::time::Duration;

/// DeepSeek provider implementation
#[derive(Debug)]
pub struct DeepSeekProvider {
    http_client: OpenAICompatibleClient,
    config: DeepSeekConfig,
}

impl DeepSeekProvider {
    pub fn new(config: DeepSeekConfig, timeout: Option<Duration>) -> Self {
        Self {
            http_client: OpenAICompatibleClient::new(timeout),
            config,
        }
    }

    fn build_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        OpenAIRequest {
            model: request.model.clone(),
            messages: vec![
                OpenAIMessage::system(&request.system_prompt),
                OpenAIMessage::user(&request.user_message),
            ],
            temperature: self.config.params.temperature,
            max_tokens: self.config.params.max_tokens,
            top_p: self.config.params.top_p,
            reasoning_effort: None,
        }
    }
}

#[async_trait]
impl ProviderAdapter for DeepSeekProvider {
    fn provider_name(&self) -> &'static str {
        "deepseek"
    }

    fn display_name(&self) -> &'static str {
        "DeepSeek"
    }

    fn is_configured(&self) -> bool {
        self.config.validate().is_ok()
    }

    async fn complete(&self, request: CompletionRequest) -> LlmResult<String> {
        let api_key = self.config.require_api_key()?;
        let wire = self.build_request(&request);
        self.http_client
            .complete_chat(self.display_name(), &self.config.base_url, api_key, &wire)
            .await
    }
}

//! Anthropic provider implementation

use super::types::{AnthropicMessage, AnthropicRequest, AnthropicResponse, ThinkingConfig};
use crate::config::{AnthropicConfig, ProviderConfig};
use crate::core_types::{CompletionRequest, ProviderAdapter};
use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use crate::providers::http::VendorHttpClient;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const THINKING_SUFFIX: &str = "-thinking";

/// Anthropic Claude provider implementation
#[derive(Debug)]
pub struct AnthropicProvider {
    http: VendorHttpClient,
    config: AnthropicConfig,
}

impl AnthropicProvider {
    pub fn new(config: AnthropicConfig, timeout: Option<Duration>) -> Self {
        Self {
            http: VendorHttpClient::new(timeout),
            config,
        }
    }

    /// Build the Messages API request.
    ///
    /// A `-thinking` model name is sent without the suffix and with extended
    /// thinking enabled.
    pub(super) fn build_request(&self, request: &CompletionRequest) -> AnthropicRequest {
        let (model, thinking) = match request.model.strip_suffix(THINKING_SUFFIX) {
            Some(base) => (
                base.to_string(),
                Some(ThinkingConfig {
                    thinking_type: "enabled".to_string(),
                    budget_tokens: self.config.thinking_budget_tokens,
                }),
            ),
            None => (request.model.clone(), None),
        };

        AnthropicRequest {
            max_tokens: if thinking.is_some() {
                self.config.thinking_max_tokens
            } else {
                self.config.max_tokens
            },
            system: request.system_prompt.clone(),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: request.user_message.clone(),
            }],
            thinking,
            model,
        }
    }

    fn build_headers(api_key: &str) -> LlmResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key).map_err(|e| {
                LlmError::configuration_error(format!("Invalid API key format: {e}"))
            })?,
        );
        headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));
        Ok(headers)
    }
}

#[async_trait]
impl ProviderAdapter for AnthropicProvider {
    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn display_name(&self) -> &'static str {
        "Anthropic"
    }

    fn is_configured(&self) -> bool {
        self.config.validate().is_ok()
    }

    async fn complete(&self, request: CompletionRequest) -> LlmResult<String> {
        let api_key = self.config.require_api_key()?;
        let url = format!("{}/v1/messages", self.config.base_url);
        let headers = Self::build_headers(api_key)?;
        let wire = self.build_request(&request);

        let response: AnthropicResponse = self
            .http
            .post_json(self.display_name(), &url, headers, &wire)
            .await?;

        if let Some(usage) = &response.usage {
            log_debug!(
                provider = "anthropic",
                model = %wire.model,
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                stop_reason = ?response.stop_reason,
                "Anthropic usage"
            );
        }

        let text = response.text();
        if text.trim().is_empty() {
            return Err(LlmError::request_failed(
                "Empty response from Anthropic",
                None,
            ));
        }
        Ok(text.trim().to_string())
    }
}

//! Gemini provider implementation
//!
//! Gemini gets the system prompt as an ordinary user turn followed by a model
//! acknowledgement, then the real user message.

use super::types::{GeminiContent, GeminiRequest, GeminiResponse, GenerationConfig};
use crate::config::{GeminiConfig, ProviderConfig};
use crate::core_types::{CompletionRequest, ProviderAdapter};
use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use crate::providers::http::VendorHttpClient;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use std::time::Duration;

const ACKNOWLEDGEMENT: &str = "I understand and will follow these instructions.";

/// Google Gemini provider implementation
#[derive(Debug)]
pub struct GeminiProvider {
    http: VendorHttpClient,
    config: GeminiConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig, timeout: Option<Duration>) -> Self {
        Self {
            http: VendorHttpClient::new(timeout),
            config,
        }
    }

    pub(super) fn build_request(&self, request: &CompletionRequest) -> GeminiRequest {
        let params = &self.config.params;
        GeminiRequest {
            contents: vec![
                GeminiContent::text("user", &request.system_prompt),
                GeminiContent::text("model", ACKNOWLEDGEMENT),
                GeminiContent::text("user", &request.user_message),
            ],
            generation_config: GenerationConfig {
                temperature: params.temperature,
                top_p: params.top_p,
                top_k: params.top_k,
                max_output_tokens: params.max_tokens,
                response_mime_type: "text/plain".to_string(),
            },
        }
    }

    fn build_headers(api_key: &str) -> LlmResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key).map_err(|e| {
                LlmError::configuration_error(format!("Invalid API key format: {e}"))
            })?,
        );
        Ok(headers)
    }
}

#[async_trait]
impl ProviderAdapter for GeminiProvider {
    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn display_name(&self) -> &'static str {
        "Gemini"
    }

    fn is_configured(&self) -> bool {
        self.config.validate().is_ok()
    }

    async fn complete(&self, request: CompletionRequest) -> LlmResult<String> {
        let api_key = self.config.require_api_key()?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, request.model
        );
        let headers = Self::build_headers(api_key)?;
        let wire = self.build_request(&request);

        let response: GeminiResponse = self
            .http
            .post_json(self.display_name(), &url, headers, &wire)
            .await?;

        log_debug!(
            provider = "gemini",
            model = %request.model,
            candidates = response.candidates.len(),
            finish_reason = ?response.candidates.first().and_then(|c| c.finish_reason.clone()),
            "Gemini response received"
        );

        let text = response.text();
        if text.trim().is_empty() {
            return Err(LlmError::request_failed("Empty response from Gemini", None));
        }
        Ok(text.trim().to_string())
    }
}

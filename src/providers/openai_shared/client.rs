//! HTTP client for OpenAI-compatible chat completion endpoints

use super::types::{OpenAIRequest, OpenAIResponse};
use crate::error::{LlmError, LlmResult};
use crate::logging::log_debug;
use crate::providers::http::VendorHttpClient;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;

/// Shared HTTP client for OpenAI-compatible providers
#[derive(Debug, Clone)]
pub struct OpenAICompatibleClient {
    http: VendorHttpClient,
}

impl OpenAICompatibleClient {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self {
            http: VendorHttpClient::new(timeout),
        }
    }

    /// Authentication headers for OpenAI-compatible APIs
    pub fn build_auth_headers(api_key: &str) -> LlmResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                LlmError::configuration_error(format!("Invalid API key format: {e}"))
            })?,
        );

        Ok(headers)
    }

    /// POST to `{base_url}/v1/chat/completions` and return the first choice's
    /// text.
    ///
    /// `display_name` names the vendor in the empty-response error.
    pub async fn complete_chat(
        &self,
        display_name: &str,
        base_url: &str,
        api_key: &str,
        request: &OpenAIRequest,
    ) -> LlmResult<String> {
        let url = format!("{base_url}/v1/chat/completions");
        let headers = Self::build_auth_headers(api_key)?;

        log_debug!(
            vendor = display_name,
            model = %request.model,
            has_temperature = request.temperature.is_some(),
            reasoning_effort = ?request.reasoning_effort,
            "Sending chat completion request"
        );

        let response: OpenAIResponse = self
            .http
            .post_json(display_name, &url, headers, request)
            .await?;

        if let Some(usage) = &response.usage {
            log_debug!(
                vendor = display_name,
                model = %request.model,
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                finish_reason = ?response.choices.first().and_then(|c| c.finish_reason.as_deref()),
                "Chat completion usage"
            );
        }

        match response.first_content().map(str::trim) {
            Some(text) if !text.is_empty() => Ok(text.to_string()),
            _ => Err(LlmError::request_failed(
                format!("Empty response from {display_name}"),
                None,
            )),
        }
    }
}

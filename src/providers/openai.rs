//! OpenAI provider implementation
//!
//! Reasoning models (`o1*`, `o3*`, `o4*`) reject `temperature` and
//! `max_tokens`, so both are left out for them. `o3-mini-high` is not a real
//! model name: it is sent as `o3-mini` with `reasoning_effort: "high"`.

use super::openai_shared::{OpenAICompatibleClient, OpenAIMessage, OpenAIRequest};
use crate::config::{OpenAIConfig, ProviderConfig};
use crate::core_types::{CompletionRequest, ProviderAdapter};
use crate::error::LlmResult;
use async_trait::async_trait;
use std::time::Duration;

const REASONING_PREFIXES: [&str; 3] = ["o1", "o3", "o4"];
const HIGH_EFFORT_SUFFIX: &str = "-high";

/// OpenAI provider implementation
#[derive(Debug)]
pub struct OpenAIProvider {
    http_client: OpenAICompatibleClient,
    config: OpenAIConfig,
}

impl OpenAIProvider {
    /// Create a provider; a missing API key only fails individual calls.
    pub fn new(config: OpenAIConfig, timeout: Option<Duration>) -> Self {
        Self {
            http_client: OpenAICompatibleClient::new(timeout),
            config,
        }
    }

    /// Whether `model` belongs to a reasoning family.
    pub fn is_reasoning_model(model: &str) -> bool {
        REASONING_PREFIXES
            .iter()
            .any(|prefix| model.starts_with(prefix))
    }

    /// Build the wire request for `request`, applying model quirks.
    pub fn build_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        let (model, reasoning_effort) = match request.model.strip_suffix(HIGH_EFFORT_SUFFIX) {
            Some(base) if Self::is_reasoning_model(base) => {
                (base.to_string(), Some("high".to_string()))
            }
            _ => (request.model.clone(), None),
        };

        let reasoning = Self::is_reasoning_model(&model);
        let params = &self.config.params;

        OpenAIRequest {
            messages: vec![
                OpenAIMessage::system(&request.system_prompt),
                OpenAIMessage::user(&request.user_message),
            ],
            temperature: if reasoning { None } else { params.temperature },
            max_tokens: if reasoning { None } else { params.max_tokens },
            top_p: if reasoning { None } else { params.top_p },
            reasoning_effort,
            model,
        }
    }
}

#[async_trait]
impl ProviderAdapter for OpenAIProvider {
    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn display_name(&self) -> &'static str {
        "OpenAI"
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

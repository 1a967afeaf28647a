//! `provider:model` identifiers

use crate::error::{LlmError, LlmResult};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A compound `provider:model` key.
///
/// Parsed by splitting on the first colon, so model names may themselves
/// contain colons. Both halves are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProviderModelId {
    provider: String,
    model: String,
}

impl ProviderModelId {
    /// Build an identifier from its two halves.
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> LlmResult<Self> {
        let provider = provider.into().trim().to_string();
        let model = model.into().trim().to_string();
        if provider.is_empty() {
            return Err(LlmError::invalid_model_id(
                format!("{provider}:{model}"),
                "provider is empty",
            ));
        }
        if model.is_empty() {
            return Err(LlmError::invalid_model_id(
                format!("{provider}:{model}"),
                "model is empty",
            ));
        }
        Ok(Self { provider, model })
    }

    /// Parse `provider:model`.
    pub fn parse(value: &str) -> LlmResult<Self> {
        let Some((provider, model)) = value.split_once(':') else {
            return Err(LlmError::invalid_model_id(value, "missing ':' separator"));
        };
        Self::new(provider, model)
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// DOM id for the preview frame of the `index`-th entry of a batch.
    ///
    /// The index keeps ids unique when the same model is requested twice.
    pub fn frame_id(&self, index: usize) -> String {
        let raw = format!("model_{index}_{}_{}", self.provider, self.model);
        let sanitized: String = raw
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();
        format!("{sanitized}_preview")
    }
}

impl fmt::Display for ProviderModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider, self.model)
    }
}

impl FromStr for ProviderModelId {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for ProviderModelId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

//! Explicit `provider name -> adapter` map
//!
//! Built once at start-up and shared by `Arc`. Tests register doubles that
//! implement the same [`ProviderAdapter`] trait.

use super::{AnthropicProvider, DeepSeekProvider, GeminiProvider, OpenAIProvider};
use crate::config::AppConfig;
use crate::core_types::ProviderAdapter;
use crate::error::{LlmError, LlmResult};
use crate::logging::log_info;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registered vendor adapters keyed by provider name
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    adapters: BTreeMap<String, Arc<dyn ProviderAdapter>>,
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.names())
            .finish()
    }
}

impl ProviderRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the four built-in vendors.
    ///
    /// Every vendor is registered even without a credential; calls to an
    /// unconfigured one fail with a configuration error.
    pub fn from_config(config: &AppConfig) -> Self {
        let timeout = config.server.request_timeout;
        let providers = &config.providers;

        let registry = Self::new()
            .with(Arc::new(OpenAIProvider::new(providers.openai.clone(), timeout)))
            .with(Arc::new(AnthropicProvider::new(
                providers.anthropic.clone(),
                timeout,
            )))
            .with(Arc::new(GeminiProvider::new(providers.gemini.clone(), timeout)))
            .with(Arc::new(DeepSeekProvider::new(
                providers.deepseek.clone(),
                timeout,
            )));

        log_info!(
            providers = ?registry.names(),
            configured = ?registry.configured(),
            "Provider registry built"
        );
        registry
    }

    /// Add or replace the adapter under its own provider name.
    pub fn register(&mut self, adapter: Arc<dyn ProviderAdapter>) {
        self.adapters
            .insert(adapter.provider_name().to_string(), adapter);
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, adapter: Arc<dyn ProviderAdapter>) -> Self {
        self.register(adapter);
        self
    }

    pub fn get(&self, provider: &str) -> Option<Arc<dyn ProviderAdapter>> {
        self.adapters.get(provider).cloned()
    }

    /// Like [`get`](Self::get) but an unknown provider is an error.
    pub fn resolve(&self, provider: &str) -> LlmResult<Arc<dyn ProviderAdapter>> {
        self.get(provider)
            .ok_or_else(|| LlmError::unsupported_provider(provider))
    }

    /// Registered provider names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.adapters.keys().map(String::as_str).collect()
    }

    /// Names of providers that currently have a credential.
    pub fn configured(&self) -> Vec<&str> {
        self.adapters
            .iter()
            .filter(|(_, adapter)| adapter.is_configured())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

//! Arena configuration
//!
//! Per-vendor settings implement [`ProviderConfig`]; process-wide settings live
//! in [`ServerConfig`]. Everything is read from the environment by
//! [`AppConfig::from_env`]. A missing credential is not a start-up error: each
//! adapter validates its own config when it is called.

use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_warn};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// Trait for provider-specific configuration
pub trait ProviderConfig: Send + Sync + Debug {
    /// Registry key of the provider (`openai`, `anthropic`, ...)
    fn provider_name(&self) -> &'static str;

    /// Environment variable that holds the credential
    fn api_key_env(&self) -> &'static str;

    /// Get the base URL for API calls
    fn base_url(&self) -> &str;

    /// Get the API key if one is configured
    fn api_key(&self) -> Option<&str>;

    /// Validate provider configuration
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::ConfigurationError`] if the API key is missing or
    /// the base URL is empty.
    fn validate(&self) -> LlmResult<()> {
        self.require_api_key().map(|_| ())
    }

    /// The API key, or a configuration error naming the missing variable.
    fn require_api_key(&self) -> LlmResult<&str> {
        if self.base_url().is_empty() {
            return Err(LlmError::configuration_error(format!(
                "{} base URL is empty",
                self.provider_name()
            )));
        }
        match self.api_key() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(LlmError::configuration_error(format!(
                "{} environment variable is not set.",
                self.api_key_env()
            ))),
        }
    }
}

/// Sampling parameters sent with every request of one provider.
///
/// `None` fields are left out of the request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingParams {
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f64>,
    pub top_k: Option<u32>,
}

impl SamplingParams {
    /// Chat-completion defaults used for OpenAI and DeepSeek.
    pub fn chat_defaults() -> Self {
        Self {
            temperature: Some(0.7),
            max_tokens: Some(2048),
            top_p: None,
            top_k: None,
        }
    }

    /// Gemini generation config defaults.
    pub fn gemini_defaults() -> Self {
        Self {
            temperature: Some(1.0),
            max_tokens: Some(8192),
            top_p: Some(0.95),
            top_k: Some(64),
        }
    }
}

/// OpenAI-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub params: SamplingParams,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            params: SamplingParams::chat_defaults(),
        }
    }
}

impl ProviderConfig for OpenAIConfig {
    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn api_key_env(&self) -> &'static str {
        "OPENAI_API_KEY"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

/// DeepSeek configuration (OpenAI-compatible API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepSeekConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub params: SamplingParams,
}

impl Default for DeepSeekConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.deepseek.com".to_string(),
            params: SamplingParams::chat_defaults(),
        }
    }
}

impl ProviderConfig for DeepSeekConfig {
    fn provider_name(&self) -> &'static str {
        "deepseek"
    }

    fn api_key_env(&self) -> &'static str {
        "DEEPSEEK_API_KEY"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

/// Anthropic-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub max_tokens: u32,
    /// Thinking budget for `-thinking` model variants
    pub thinking_budget_tokens: u32,
    /// `max_tokens` used when thinking is enabled; must exceed the budget
    pub thinking_max_tokens: u32,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.anthropic.com".to_string(),
            max_tokens: 2048,
            thinking_budget_tokens: 16_000,
            thinking_max_tokens: 36_000,
        }
    }
}

impl ProviderConfig for AnthropicConfig {
    fn provider_name(&self) -> &'static str {
        "anthropic"
    }

    fn api_key_env(&self) -> &'static str {
        "ANTHROPIC_API_KEY"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

/// Gemini-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub params: SamplingParams,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            params: SamplingParams::gemini_defaults(),
        }
    }
}

impl ProviderConfig for GeminiConfig {
    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn api_key_env(&self) -> &'static str {
        "GEMINI_API_KEY"
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

/// Settings for every built-in vendor
#[derive(Debug, Clone, Default)]
pub struct ProvidersConfig {
    pub openai: OpenAIConfig,
    pub anthropic: AnthropicConfig,
    pub gemini: GeminiConfig,
    pub deepseek: DeepSeekConfig,
}

impl ProvidersConfig {
    /// All vendor configs, in registry order
    pub fn all(&self) -> [&dyn ProviderConfig; 4] {
        [&self.openai, &self.anthropic, &self.gemini, &self.deepseek]
    }
}

/// Process-wide settings for the dispatcher and HTTP layer
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// URL injected as `<base href>` into previews
    pub preview_base_url: String,
    /// Permits of the per-dispatch concurrency gate
    pub concurrency_limit: usize,
    /// Per-call upstream timeout; `None` waits forever
    pub request_timeout: Option<Duration>,
    /// `provider:model` used for the optional planning call
    pub planner_model: String,
    /// `provider:model` behind `POST /api/llm`
    pub fast_model: String,
    /// Reject a second generation request while one is running
    pub single_flight: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            preview_base_url: "http://localhost:7860".to_string(),
            concurrency_limit: 5,
            request_timeout: Some(Duration::from_secs(180)),
            planner_model: "openai:o3-mini".to_string(),
            fast_model: "gemini:gemini-2.0-flash".to_string(),
            single_flight: true,
        }
    }
}

/// Complete arena configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub providers: ProvidersConfig,
    pub server: ServerConfig,
}

/// Load `.env` (or `path`) into the process environment.
///
/// Variables already set win over the file. A missing file is `Ok(None)`.
pub fn load_dotenv(path: Option<&Path>) -> Result<Option<PathBuf>, dotenvy::Error> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    /// This is the ONLY method that should access environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// Invalid numeric or boolean values are logged and replaced by defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut providers = ProvidersConfig::default();
        providers.openai.api_key = non_empty("OPENAI_API_KEY");
        if let Some(url) = non_empty("OPENAI_BASE_URL") {
            providers.openai.base_url = trim_base_url(&url);
        }
        providers.anthropic.api_key = non_empty("ANTHROPIC_API_KEY");
        if let Some(url) = non_empty("ANTHROPIC_BASE_URL") {
            providers.anthropic.base_url = trim_base_url(&url);
        }
        providers.gemini.api_key = non_empty("GEMINI_API_KEY");
        if let Some(url) = non_empty("GEMINI_BASE_URL") {
            providers.gemini.base_url = trim_base_url(&url);
        }
        providers.deepseek.api_key = non_empty("DEEPSEEK_API_KEY");
        if let Some(url) = non_empty("DEEPSEEK_BASE_URL") {
            providers.deepseek.base_url = trim_base_url(&url);
        }

        let defaults = ServerConfig::default();
        let timeout_secs: u64 = parse_or(&lookup, "ARENA_REQUEST_TIMEOUT_SECS", 180);
        let server = ServerConfig {
            preview_base_url: non_empty("BASE_URL")
                .map(|url| trim_base_url(&url))
                .unwrap_or(defaults.preview_base_url),
            concurrency_limit: parse_or(&lookup, "ARENA_CONCURRENCY_LIMIT", 5usize).max(1),
            request_timeout: (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs)),
            planner_model: non_empty("ARENA_PLANNER_MODEL").unwrap_or(defaults.planner_model),
            fast_model: non_empty("ARENA_FAST_MODEL").unwrap_or(defaults.fast_model),
            single_flight: parse_or(&lookup, "ARENA_SINGLE_FLIGHT", true),
        };

        log_debug!(
            has_openai_key = providers.openai.api_key.is_some(),
            has_anthropic_key = providers.anthropic.api_key.is_some(),
            has_gemini_key = providers.gemini.api_key.is_some(),
            has_deepseek_key = providers.deepseek.api_key.is_some(),
            concurrency_limit = server.concurrency_limit,
            preview_base_url = %server.preview_base_url,
            "Arena configuration loaded"
        );

        Self { providers, server }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => match raw.trim().parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                log_warn!(
                    key = key,
                    value = %raw,
                    error = %e,
                    "Invalid configuration value, using default"
                );
                default
            }
        },
        _ => default,
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

//! # llm-arena
//!
//! Fan one prompt out to several LLM providers in parallel and show every
//! answer side by side as a sandboxed HTML preview.
//!
//! ## Key Features
//!
//! - **Multiple Providers**: OpenAI, Anthropic, Gemini and DeepSeek behind one trait
//! - **Bounded Fan-out**: a per-dispatch semaphore caps concurrent upstream calls
//! - **Failure Isolation**: one provider's error never aborts the batch
//! - **Safe Previews**: generated HTML runs in a sandboxed iframe from a data URI
//! - **HTTP API**: `/api/generate`, `/api/llm`, `/api/models` and `/healthz`
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use llm_arena::{AppConfig, Dispatcher, GenerationRequest, PromptType, ProviderRegistry};
//!
//! # async fn example() {
//! let config = AppConfig::from_env();
//! let registry = Arc::new(ProviderRegistry::from_config(&config));
//! let dispatcher = Dispatcher::from_config(registry, &config.server);
//!
//! let request = GenerationRequest::new("a pomodoro timer", PromptType::WebApp)
//!     .with_models(["openai:gpt-4o", "gemini:gemini-2.0-flash"]);
//! let report = dispatcher.dispatch_all(&request).await;
//! for result in &report.results {
//!     println!("{} succeeded: {}", result.model_id, result.succeeded());
//! }
//! # }
//! ```

// Allow missing errors documentation - errors are self-documenting via type signatures
#![allow(clippy::missing_errors_doc)]

pub mod core_types;

// Logging utilities (re-exports tracing with log_* naming)
pub mod logging;

pub mod admission;
pub mod api;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod generation;
pub mod presenter;
pub mod preview;
pub mod prompts;
pub mod providers;
pub mod response_parser;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use admission::{AdmissionGate, AdmissionPermit};
pub use config::{
    AnthropicConfig, AppConfig, DeepSeekConfig, GeminiConfig, OpenAIConfig, ProviderConfig,
    ProvidersConfig, SamplingParams, ServerConfig,
};
pub use dispatcher::Dispatcher;
pub use error::{FailureKind, LlmError, LlmResult};
pub use preview::PreviewRenderer;
pub use providers::{
    AnthropicProvider, DeepSeekProvider, GeminiProvider, OpenAIProvider, ProviderRegistry,
};
pub use response_parser::ResponseParser;

pub use core_types::{
    CompletionRequest, DispatchReport, GenerationOutcome, GenerationRequest, GenerationResult,
    PromptType, ProviderAdapter, ProviderModelId,
};

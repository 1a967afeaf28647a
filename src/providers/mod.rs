//! LLM Provider implementations
//!
//! This module contains implementations for the supported vendors:
//!
//! - **openai**: OpenAI chat completions, with reasoning-model quirks
//! - **deepseek**: DeepSeek through the OpenAI-compatible API
//! - **anthropic**: Anthropic Claude through the native Messages API
//! - **gemini**: Google Gemini through `generateContent`
//! - **openai_shared**: Shared structures and client for OpenAI-compatible vendors
//! - **http**: One-shot HTTP calls and vendor error mapping used by all of them
//! - **registry**: The `provider name -> adapter` map
//!
//! ## Architecture
//!
//! ```text
//! http.rs             <- timeout-bound POST, status -> LlmError
//!    |         \
//! openai_shared.rs   anthropic/  gemini/
//!    |        |
//! openai.rs  deepseek.rs
//! ```

pub mod anthropic;
pub mod deepseek;
pub mod gemini;
pub mod http;
pub mod openai;
pub mod openai_shared;
pub mod registry;

pub use anthropic::AnthropicProvider;
pub use deepseek::DeepSeekProvider;
pub use gemini::GeminiProvider;
pub use openai::OpenAIProvider;
pub use registry::ProviderRegistry;

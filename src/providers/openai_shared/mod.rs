//! Shared OpenAI-compatible API structures and client
//!
//! OpenAI and DeepSeek speak the same chat completions protocol. They differ
//! only in base URL and in how model names map to request parameters.
//!
//! - `types` - request and response structures
//! - `client` - authenticated POST to `/v1/chat/completions`

pub mod client;
pub mod types;

pub use client::OpenAICompatibleClient;
pub use types::*;

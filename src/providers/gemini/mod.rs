//! Google Gemini provider implementation
//!
//! Talks to the `v1beta` `generateContent` endpoint, which also serves the
//! experimental and thinking model variants.

mod provider;
mod types;


pub use provider::GeminiProvider;

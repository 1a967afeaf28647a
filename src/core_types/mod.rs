//! Core types for the multi-provider arena
//!
//! ## Organization
//! - `model_id` - `provider:model` identifiers
//! - `generation` - Requests, per-provider results and dispatch reports
//! - `provider` - The `ProviderAdapter` trait every vendor implements

pub mod generation;
pub mod model_id;
pub mod provider;

// Re-export commonly used types
pub use generation::{
    DispatchReport, GenerationOutcome, GenerationRequest, GenerationResult, PromptType,
};
pub use model_id::ProviderModelId;
pub use provider::{CompletionRequest, ProviderAdapter};

#[cfg(test)]
pub use provider::MockProviderAdapter;

//! Generation requests, per-provider results and dispatch reports

use super::model_id::ProviderModelId;
use crate::error::FailureKind;
use crate::prompts::{DEFAULT_TEXT_SYSTEM_PROMPT, DEFAULT_WEBAPP_SYSTEM_PROMPT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What kind of answer the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PromptType {
    /// A self-contained HTML/JS application rendered in the preview frame
    #[default]
    #[serde(rename = "webapp", alias = "web_app", alias = "Web App")]
    WebApp,
    /// A plain text answer
    #[serde(rename = "text", alias = "Text")]
    Text,
}

impl PromptType {
    /// The user turn sent to the provider for `prompt`.
    pub fn user_message(self, prompt: &str) -> String {
        match self {
            Self::WebApp => format!("Create a web application that: {prompt}"),
            Self::Text => prompt.to_string(),
        }
    }

    /// The user turn sent to the planning model.
    pub fn planning_message(self, prompt: &str) -> String {
        match self {
            Self::WebApp => {
                format!("Write an implementation plan for the following web application: {prompt}")
            }
            Self::Text => format!("Write an implementation plan for the following feature: {prompt}"),
        }
    }

    /// System prompt used when the caller does not supply one.
    pub fn default_system_prompt(self) -> &'static str {
        match self {
            Self::WebApp => DEFAULT_WEBAPP_SYSTEM_PROMPT,
            Self::Text => DEFAULT_TEXT_SYSTEM_PROMPT,
        }
    }
}

/// One UI submission: a prompt fanned out to an ordered list of models.
///
/// `models` keeps the raw `provider:model` strings; duplicates are allowed and
/// their order is the display order. Entries that do not parse or name an
/// unregistered provider are skipped by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub prompt_type: PromptType,
    pub system_prompt: String,
    pub models: Vec<String>,
    pub use_planning: bool,
}

impl GenerationRequest {
    /// Request with the default system prompt for `prompt_type` and no models.
    pub fn new(prompt: impl Into<String>, prompt_type: PromptType) -> Self {
        Self {
            prompt: prompt.into(),
            prompt_type,
            system_prompt: prompt_type.default_system_prompt().to_string(),
            models: Vec::new(),
            use_planning: false,
        }
    }

    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn with_planning(mut self, use_planning: bool) -> Self {
        self.use_planning = use_planning;
        self
    }
}

/// Typed outcome of one provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// Code extracted from the model's answer
    Success { code: String },
    /// The call failed; `provider` is the vendor's display name
    Failure {
        kind: FailureKind,
        provider: String,
        message: String,
    },
}

/// Result for one requested `provider:model` entry.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub model_id: ProviderModelId,
    pub outcome: GenerationOutcome,
    /// Renderable HTML: a sandboxed frame on success, an error snippet otherwise
    pub preview: String,
    /// DOM id of the preview frame
    pub frame_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl GenerationResult {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, GenerationOutcome::Success { .. })
    }

    /// Displayable code; failures render as `Error in <Provider>: <message>`.
    pub fn code(&self) -> String {
        match &self.outcome {
            GenerationOutcome::Success { code } => code.clone(),
            GenerationOutcome::Failure {
                provider, message, ..
            } => format!("Error in {provider}: {message}"),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match &self.outcome {
            GenerationOutcome::Success { .. } => None,
            GenerationOutcome::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

/// Everything one dispatch produced.
#[derive(Debug, Clone)]
pub struct DispatchReport {
    pub request_id: Uuid,
    /// Implementation plan, when planning was requested and succeeded
    pub plan: Option<String>,
    /// One entry per resolvable model, in request order
    pub results: Vec<GenerationResult>,
}

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::{ApiError, AppJson, AppState};
use crate::core_types::{GenerationRequest, GenerationResult, PromptType};
use crate::error::FailureKind;
use crate::presenter::present;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub prompt_type: PromptType,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub use_planning: bool,
}

impl GenerateRequest {
    fn into_generation_request(self) -> GenerationRequest {
        let request = GenerationRequest::new(self.prompt, self.prompt_type)
            .with_models(self.models)
            .with_planning(self.use_planning);
        match self.system_prompt {
            Some(system_prompt) if !system_prompt.trim().is_empty() => {
                request.with_system_prompt(system_prompt)
            }
            _ => request,
        }
    }
}

/// JSON rendering of one [`GenerationResult`]
#[derive(Debug, Serialize)]
pub struct GenerationResultView {
    pub model: String,
    pub provider: String,
    pub succeeded: bool,
    pub code: String,
    pub preview: String,
    pub frame_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<FailureKind>,
    pub elapsed_ms: i64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl From<&GenerationResult> for GenerationResultView {
    fn from(result: &GenerationResult) -> Self {
        Self {
            model: result.model_id.to_string(),
            provider: result.model_id.provider().to_string(),
            succeeded: result.succeeded(),
            code: result.code(),
            preview: result.preview.clone(),
            frame_id: result.frame_id.clone(),
            error_kind: result.failure_kind(),
            elapsed_ms: result.elapsed_ms(),
            started_at: result.started_at,
            finished_at: result.finished_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub request_id: Uuid,
    pub plan: Option<String>,
    pub results: Vec<GenerationResultView>,
    pub html: String,
}

/// Fan a prompt out to the requested models.
///
/// Rejected with 429 while another generation is in progress.
pub async fn generate(
    State(state): State<AppState>,
    AppJson(req): AppJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    if req.prompt.trim().is_empty() {
        return Err(ApiError::bad_request("prompt must not be empty"));
    }
    if req.models.is_empty() {
        return Err(ApiError::bad_request("at least one model must be selected"));
    }

    let Some(_admitted) = state.gate.try_admit() else {
        return Err(ApiError::busy());
    };

    let request = req.into_generation_request();
    let report = state.dispatcher.dispatch_all(&request).await;

    Ok(Json(GenerateResponse {
        request_id: report.request_id,
        html: present(&report.results),
        results: report.results.iter().map(GenerationResultView::from).collect(),
        plan: report.plan,
    }))
}

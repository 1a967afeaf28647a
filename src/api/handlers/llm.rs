use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::api::{ApiError, AppJson, AppState};
use crate::core_types::{CompletionRequest, ProviderModelId};
use crate::logging::{log_error, log_info};
use crate::prompts::DEFAULT_TEXT_SYSTEM_PROMPT;
use crate::response_parser::ResponseParser;

/// How `/api/llm` returns the model's answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    /// Raw text, `text/plain`
    #[default]
    Text,
    /// Fence-stripped and parsed, `application/json`
    Json,
}

#[derive(Debug, Deserialize)]
pub struct LlmRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub format_type: FormatType,
}

/// One call to the fast model, used by generated apps at runtime.
pub async fn llm(
    State(state): State<AppState>,
    AppJson(req): AppJson<LlmRequest>,
) -> Result<Response, ApiError> {
    if req.prompt.trim().is_empty() {
        return Err(ApiError::bad_request("prompt must not be empty"));
    }

    let model_id = ProviderModelId::parse(&state.server.fast_model)?;
    let adapter = state.registry.resolve(model_id.provider())?;

    log_info!(
        model = %model_id,
        format_type = ?req.format_type,
        prompt_length = req.prompt.len(),
        "LLM API request"
    );

    let text = adapter
        .complete(CompletionRequest::new(
            model_id.model(),
            DEFAULT_TEXT_SYSTEM_PROMPT,
            req.prompt,
        ))
        .await
        .map_err(|e| {
            log_error!(model = %model_id, error = %e, "LLM API call failed");
            ApiError::upstream(adapter.display_name(), &e)
        })?;

    match req.format_type {
        FormatType::Text => Ok(text.into_response()),
        FormatType::Json => {
            let value = ResponseParser::parse_json(&text)?;
            Ok(Json(value).into_response())
        }
    }
}

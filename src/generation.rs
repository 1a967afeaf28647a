//! One provider call turned into a renderable result
//!
//! [`generate`] is the uniform half of every adapter: it builds the user
//! turn, calls [`ProviderAdapter::complete`], extracts the fenced code and
//! renders the preview. Every error is folded into a failed
//! [`GenerationResult`]; nothing escapes this boundary.

use crate::core_types::{
    CompletionRequest, GenerationOutcome, GenerationResult, PromptType, ProviderAdapter,
    ProviderModelId,
};
use crate::error::{ErrorSeverity, LlmError};
use crate::logging::{log_error, log_info, log_warn};
use crate::preview::PreviewRenderer;
use crate::response_parser::ResponseParser;
use chrono::Utc;

/// Inputs shared by every unit of one dispatch.
#[derive(Debug, Clone, Copy)]
pub struct GenerationContext<'a> {
    pub prompt: &'a str,
    pub system_prompt: &'a str,
    pub prompt_type: PromptType,
    pub renderer: &'a PreviewRenderer,
}

/// Call `adapter` for `model_id` and return a result that always renders.
pub async fn generate(
    adapter: &dyn ProviderAdapter,
    model_id: &ProviderModelId,
    frame_id: String,
    ctx: GenerationContext<'_>,
) -> GenerationResult {
    let started_at = Utc::now();
    log_info!(
        provider = model_id.provider(),
        model = model_id.model(),
        "Generation started"
    );

    let request = CompletionRequest::new(
        model_id.model(),
        ctx.system_prompt,
        ctx.prompt_type.user_message(ctx.prompt),
    );

    let (outcome, preview) = match adapter.complete(request).await {
        Ok(text) => {
            let code = ResponseParser::extract_code(&text);
            let preview = ctx.renderer.render(&code, Some(&frame_id));
            log_info!(
                provider = model_id.provider(),
                model = model_id.model(),
                elapsed_ms = (Utc::now() - started_at).num_milliseconds(),
                code_length = code.len(),
                "Generation succeeded"
            );
            (GenerationOutcome::Success { code }, preview)
        }
        Err(e) => {
            log_failure(model_id, &e);
            failure(adapter.display_name(), &e, ctx.renderer)
        }
    };

    GenerationResult {
        model_id: model_id.clone(),
        outcome,
        preview,
        frame_id,
        started_at,
        finished_at: Utc::now(),
    }
}

/// Log a failed call at the level its severity calls for.
fn log_failure(model_id: &ProviderModelId, err: &LlmError) {
    let provider = model_id.provider();
    let model = model_id.model();
    let category = err.category();
    match err.severity() {
        ErrorSeverity::Error => {
            log_error!(provider, model, ?category, error = %err, "Generation failed")
        }
        ErrorSeverity::Warning => {
            log_warn!(provider, model, ?category, error = %err, "Generation failed")
        }
        ErrorSeverity::Info => {
            log_info!(provider, model, ?category, error = %err, "Generation failed")
        }
    }
}

/// Failed outcome and its error snippet for `err`.
pub(crate) fn failure(
    display_name: &str,
    err: &LlmError,
    renderer: &PreviewRenderer,
) -> (GenerationOutcome, String) {
    let message = err.to_string();
    let preview = renderer.render_error(&format!("Error in {display_name}: {message}"));
    let outcome = GenerationOutcome::Failure {
        kind: err.failure_kind(),
        provider: display_name.to_string(),
        message,
    };
    (outcome, preview)
}

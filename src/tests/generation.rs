// Unit Tests for single-provider generation
//
// UNIT UNDER TEST: generation::generate
//
// BUSINESS RESPONSIBILITY:
//   - Builds the user turn from the prompt type
//   - Extracts fenced code and renders it as a preview frame
//   - Folds every adapter error into a failed, still renderable result

use super::helpers::{decode_frame, test_renderer, Behavior, FakeAdapter};
use crate::core_types::{GenerationOutcome, PromptType, ProviderModelId};
use crate::error::FailureKind;
use crate::generation::{generate, GenerationContext};
use crate::preview::PreviewRenderer;

fn ctx<'a>(renderer: &'a PreviewRenderer, prompt_type: PromptType) -> GenerationContext<'a> {
    GenerationContext {
        prompt: "a todo list",
        system_prompt: "SYSTEM",
        prompt_type,
        renderer,
    }
}

#[tokio::test]
async fn test_success_extracts_code_and_renders_frame() {
    // Arrange
    let renderer = test_renderer();
    let adapter = FakeAdapter::new(
        "openai",
        "OpenAI",
        Behavior::Reply("Here:\n```html\n<ul><li>a</li></ul>\n```".to_string()),
    );
    let id = ProviderModelId::parse("openai:gpt-4o").unwrap();

    // Act
    let result = generate(
        &adapter,
        &id,
        id.frame_id(0),
        ctx(&renderer, PromptType::WebApp),
    )
    .await;

    // Assert
    assert!(result.succeeded());
    assert_eq!(result.code(), "<ul><li>a</li></ul>");
    assert!(result.preview.contains(r#"id="model_0_openai_gpt_4o_preview""#));
    assert!(decode_frame(&result.preview).contains("<ul><li>a</li></ul>"));
    assert!(result.finished_at >= result.started_at);
}

#[tokio::test]
async fn test_webapp_and_text_build_different_user_turns() {
    // Arrange
    let renderer = test_renderer();
    let adapter = FakeAdapter::new("gemini", "Gemini", Behavior::Reply("ok".to_string()));
    let calls = adapter.calls();
    let id = ProviderModelId::parse("gemini:gemini-2.0-flash").unwrap();

    // Act
    generate(&adapter, &id, id.frame_id(0), ctx(&renderer, PromptType::WebApp)).await;
    generate(&adapter, &id, id.frame_id(1), ctx(&renderer, PromptType::Text)).await;

    // Assert
    let calls = calls.lock().unwrap();
    assert_eq!(calls[0].user_message, "Create a web application that: a todo list");
    assert_eq!(calls[1].user_message, "a todo list");
    assert_eq!(calls[0].system_prompt, "SYSTEM");
    assert_eq!(calls[0].model, "gemini-2.0-flash");
}

#[tokio::test]
async fn test_configuration_failure_becomes_error_result() {
    // Arrange
    let renderer = test_renderer();
    let adapter = FakeAdapter::new("anthropic", "Anthropic", Behavior::FailConfiguration);
    let id = ProviderModelId::parse("anthropic:claude-3-5-sonnet-20241022").unwrap();

    // Act
    let result = generate(&adapter, &id, id.frame_id(0), ctx(&renderer, PromptType::WebApp)).await;

    // Assert
    assert!(!result.succeeded());
    assert_eq!(result.failure_kind(), Some(FailureKind::Configuration));
    assert!(result.code().starts_with("Error in Anthropic: "));
    assert!(result.code().contains("FAKE_API_KEY"));
    assert!(result
        .preview
        .starts_with("<div style='padding: 8px;color:red;'>Error in Anthropic: "));
    assert!(!result.preview.contains("<iframe"));
}

#[tokio::test]
async fn test_upstream_failure_keeps_provider_and_message() {
    // Arrange
    let renderer = test_renderer();
    let adapter = FakeAdapter::new(
        "deepseek",
        "DeepSeek",
        Behavior::FailUpstream("connection refused".to_string()),
    );
    let id = ProviderModelId::parse("deepseek:deepseek-chat").unwrap();

    // Act
    let result = generate(&adapter, &id, id.frame_id(0), ctx(&renderer, PromptType::Text)).await;

    // Assert
    match &result.outcome {
        GenerationOutcome::Failure {
            kind,
            provider,
            message,
        } => {
            assert_eq!(*kind, FailureKind::Upstream);
            assert_eq!(provider, "DeepSeek");
            assert!(message.contains("connection refused"));
        }
        GenerationOutcome::Success { .. } => panic!("expected a failure"),
    }
}

//! Integration Tests for vendor adapters over HTTP
//!
//! UNIT UNDER TEST: OpenAIProvider, DeepSeekProvider, AnthropicProvider, GeminiProvider
//!
//! BUSINESS RESPONSIBILITY:
//!   - Send one authenticated request per call to the vendor endpoint
//!   - Shape the request body for each vendor and model quirk
//!   - Return the assistant text from the vendor's response envelope
//!   - Report empty answers as request failures
//!
//! TEST COVERAGE:
//!   - Endpoint paths and authentication headers
//!   - Reasoning model and `-high` handling for OpenAI
//!   - Extended thinking for `-thinking` Anthropic models
//!   - Gemini's system-prompt acknowledgement turn
//!   - Empty responses

mod common;

use common::*;
use llm_arena::{
    AnthropicProvider, DeepSeekProvider, FailureKind, GeminiProvider, OpenAIProvider,
    ProviderAdapter,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer};

async fn only_request_body(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "exactly one upstream attempt");
    serde_json::from_slice(&requests[0].body).unwrap()
}

mod openai {
    use super::*;

    #[tokio::test]
    async fn test_chat_completion_returns_first_choice() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4o",
                "messages": [
                    {"role": "system", "content": "You are a helpful assistant."},
                    {"role": "user", "content": "Say hi"}
                ],
                "temperature": 0.7,
                "max_tokens": 2048
            })))
            .respond_with(chat_completion_response("  Hello there!  "))
            .expect(1)
            .mount(&server)
            .await;
        let provider = OpenAIProvider::new(openai_config(&server.uri()), None);

        // Act
        let text = provider.complete(completion("gpt-4o")).await.unwrap();

        // Assert
        assert_eq!(text, "Hello there!");
    }

    #[tokio::test]
    async fn test_o3_mini_high_sends_reasoning_effort_without_sampling() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(chat_completion_response("ok"))
            .mount(&server)
            .await;
        let provider = OpenAIProvider::new(openai_config(&server.uri()), None);

        // Act
        provider.complete(completion("o3-mini-high")).await.unwrap();

        // Assert
        let body = only_request_body(&server).await;
        assert_eq!(body["model"], "o3-mini");
        assert_eq!(body["reasoning_effort"], "high");
        assert!(body.get("temperature").is_none());
        assert!(body.get("max_tokens").is_none());
    }

    #[tokio::test]
    async fn test_empty_content_is_a_request_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(chat_completion_response("   "))
            .mount(&server)
            .await;
        let provider = OpenAIProvider::new(openai_config(&server.uri()), None);

        let err = provider.complete(completion("gpt-4o")).await.unwrap_err();

        assert_eq!(err.failure_kind(), FailureKind::Upstream);
        assert!(err.to_string().contains("Empty response from OpenAI"));
    }

    #[tokio::test]
    async fn test_missing_key_never_reaches_the_network() {
        let server = MockServer::start().await;
        let mut config = openai_config(&server.uri());
        config.api_key = None;
        let provider = OpenAIProvider::new(config, None);

        let err = provider.complete(completion("gpt-4o")).await.unwrap_err();

        assert_eq!(err.failure_kind(), FailureKind::Configuration);
        assert!(!provider.is_configured());
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}

mod deepseek {
    use super::*;

    #[tokio::test]
    async fn test_model_is_passed_through_with_bearer_auth() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({"model": "deepseek-reasoner"})))
            .respond_with(chat_completion_response("```html\n<p>hi</p>\n```"))
            .expect(1)
            .mount(&server)
            .await;
        let provider = DeepSeekProvider::new(deepseek_config(&server.uri()), None);

        // Act
        let text = provider
            .complete(completion("deepseek-reasoner"))
            .await
            .unwrap();

        // Assert
        assert_eq!(text, "```html\n<p>hi</p>\n```");
        assert_eq!(provider.display_name(), "DeepSeek");
    }
}

mod anthropic {
    use super::*;

    #[tokio::test]
    async fn test_messages_api_joins_text_blocks() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-key"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(body_partial_json(json!({
                "model": "claude-3-5-sonnet-20241022",
                "max_tokens": 2048,
                "system": "You are a helpful assistant.",
                "messages": [{"role": "user", "content": "Say hi"}]
            })))
            .respond_with(anthropic_response("Hi!"))
            .expect(1)
            .mount(&server)
            .await;
        let provider = AnthropicProvider::new(anthropic_config(&server.uri()), None);

        // Act
        let text = provider
            .complete(completion("claude-3-5-sonnet-20241022"))
            .await
            .unwrap();

        // Assert
        assert_eq!(text, "Hi!");
        let body = only_request_body(&server).await;
        assert!(body.get("thinking").is_none());
    }

    #[tokio::test]
    async fn test_thinking_suffix_enables_extended_thinking() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(anthropic_response("thought it through"))
            .mount(&server)
            .await;
        let provider = AnthropicProvider::new(anthropic_config(&server.uri()), None);

        // Act
        provider
            .complete(completion("claude-3-7-sonnet-20250219-thinking"))
            .await
            .unwrap();

        // Assert
        let body = only_request_body(&server).await;
        assert_eq!(body["model"], "claude-3-7-sonnet-20250219");
        assert_eq!(body["max_tokens"], 36000);
        assert_eq!(
            body["thinking"],
            json!({"type": "enabled", "budget_tokens": 16000})
        );
    }
}

mod gemini {
    use super::*;

    #[tokio::test]
    async fn test_system_prompt_is_acknowledged_before_user_turn() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(gemini_response("Hello from Gemini"))
            .expect(1)
            .mount(&server)
            .await;
        let provider = GeminiProvider::new(gemini_config(&server.uri()), None);

        // Act
        let text = provider
            .complete(completion("gemini-2.0-flash"))
            .await
            .unwrap();

        // Assert
        assert_eq!(text, "Hello from Gemini");
        let body = only_request_body(&server).await;
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[0]["parts"][0]["text"], "You are a helpful assistant.");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "Say hi");
        assert_eq!(body["generationConfig"]["responseMimeType"], "text/plain");
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 8192);
    }

    #[tokio::test]
    async fn test_no_candidates_is_a_request_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;
        let provider = GeminiProvider::new(gemini_config(&server.uri()), None);

        let err = provider
            .complete(completion("gemini-2.0-flash"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Empty response from Gemini"));
    }
}

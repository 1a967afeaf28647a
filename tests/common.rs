//! Test helper utilities for llm-arena integration tests
//!
//! Vendor configs pointed at a wiremock server, and canned vendor responses.
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use llm_arena::{
    AnthropicConfig, CompletionRequest, DeepSeekConfig, GeminiConfig, OpenAIConfig,
};
use serde_json::json;
use wiremock::ResponseTemplate;

pub const TEST_API_KEY: &str = "test-key";

pub fn openai_config(base_url: &str) -> OpenAIConfig {
    OpenAIConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        base_url: base_url.to_string(),
        ..OpenAIConfig::default()
    }
}

pub fn deepseek_config(base_url: &str) -> DeepSeekConfig {
    DeepSeekConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        base_url: base_url.to_string(),
        ..DeepSeekConfig::default()
    }
}

pub fn anthropic_config(base_url: &str) -> AnthropicConfig {
    AnthropicConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        base_url: base_url.to_string(),
        ..AnthropicConfig::default()
    }
}

pub fn gemini_config(base_url: &str) -> GeminiConfig {
    GeminiConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        base_url: base_url.to_string(),
        ..GeminiConfig::default()
    }
}

pub fn completion(model: &str) -> CompletionRequest {
    CompletionRequest::new(model, "You are a helpful assistant.", "Say hi")
}

/// OpenAI-compatible chat completion body with one choice.
pub fn chat_completion_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    }))
}

/// Anthropic Messages API body; a thinking block precedes the text.
pub fn anthropic_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "content": [
            {"type": "thinking", "thinking": "hmm", "signature": "sig"},
            {"type": "text", "text": text}
        ],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 10, "output_tokens": 5}
    }))
}

/// Gemini generateContent body with one candidate.
pub fn gemini_response(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    }))
}

/// Vendor error body in the shared `{"error": {"message": ...}}` shape.
pub fn vendor_error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "error": {"message": message, "type": "test_error"}
    }))
}

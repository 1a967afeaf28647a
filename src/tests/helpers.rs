//! Test helper utilities for llm-arena unit tests
//!
//! IMPORTANT: These helpers are test-only and should NEVER be used in production code.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use crate::core_types::{CompletionRequest, ProviderAdapter};
use crate::error::{LlmError, LlmResult};
use crate::preview::PreviewRenderer;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_BASE_URL: &str = "http://arena.test";

pub fn test_renderer() -> PreviewRenderer {
    PreviewRenderer::new(TEST_BASE_URL)
}

/// What a [`FakeAdapter`] does when called
#[derive(Clone)]
pub enum Behavior {
    /// Return this text
    Reply(String),
    /// Return the model name wrapped in an html fence
    EchoModel,
    /// Fail with a configuration error
    FailConfiguration,
    /// Fail with an upstream error carrying this message
    FailUpstream(String),
    /// Panic inside the call
    Panic,
}

/// Scriptable adapter that records calls and concurrent entries
pub struct FakeAdapter {
    name: &'static str,
    display: &'static str,
    behavior: Behavior,
    delay: Duration,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl FakeAdapter {
    pub fn new(name: &'static str, display: &'static str, behavior: Behavior) -> Self {
        Self {
            name,
            display,
            behavior,
            delay: Duration::ZERO,
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Time each call spends "upstream"
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Handle to the highest number of calls seen in flight at once
    pub fn max_in_flight(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.max_in_flight)
    }

    /// Handle to the number of calls currently in flight
    pub fn in_flight(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.in_flight)
    }

    /// Handle to the recorded requests
    pub fn calls(&self) -> Arc<Mutex<Vec<CompletionRequest>>> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl ProviderAdapter for FakeAdapter {
    fn provider_name(&self) -> &'static str {
        self.name
    }

    fn display_name(&self) -> &'static str {
        self.display
    }

    fn is_configured(&self) -> bool {
        !matches!(self.behavior, Behavior::FailConfiguration)
    }

    async fn complete(&self, request: CompletionRequest) -> LlmResult<String> {
        self.calls.lock().unwrap().push(request.clone());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        let in_flight = InFlight(Arc::clone(&self.in_flight));
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        drop(in_flight);

        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::EchoModel => Ok(format!("```html\n<p>{}</p>\n```", request.model)),
            Behavior::FailConfiguration => Err(LlmError::configuration_error(
                "FAKE_API_KEY environment variable is not set.",
            )),
            Behavior::FailUpstream(message) => Err(LlmError::request_failed(message.clone(), None)),
            Behavior::Panic => panic!("fake adapter panicked"),
        }
    }
}

/// Decrements the in-flight counter even when the call is cancelled.
struct InFlight(Arc<AtomicUsize>);

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Decode the data URI of the first iframe in `html`.
pub fn decode_frame(html: &str) -> String {
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    let marker = "data:text/html;charset=utf-8;base64,";
    let start = html.find(marker).expect("preview has a data URI") + marker.len();
    let end = start + html[start..].find('"').expect("data URI is quoted");
    let bytes = STANDARD.decode(&html[start..end]).expect("valid base64");
    String::from_utf8(bytes).expect("valid utf-8")
}

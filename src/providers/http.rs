//! HTTP plumbing shared by every vendor adapter
//!
//! One attempt per call, no retry. Non-2xx responses are mapped to
//! [`LlmError`] the same way for all vendors: 401/403 are authentication
//! failures, 429 is a rate limit (honouring `retry-after`), anything else is
//! a request failure carrying the vendor's own error message when the body
//! has one.

use crate::error::{LlmError, LlmResult};
use crate::logging::{log_debug, log_error};
use reqwest::header::HeaderMap;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

/// Seconds to wait after a 429 without a usable `retry-after` header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// `reqwest` client with the arena's per-call timeout applied
#[derive(Debug, Clone)]
pub struct VendorHttpClient {
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl Default for VendorHttpClient {
    fn default() -> Self {
        Self::new(None)
    }
}

impl VendorHttpClient {
    /// Client whose requests fail with [`LlmError::Timeout`] after `timeout`.
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = match builder.build() {
            Ok(client) => client,
            Err(e) => {
                log_error!(error = %e, "Failed to build HTTP client, using defaults");
                reqwest::Client::new()
            }
        };
        Self { client, timeout }
    }

    /// POST `body` as JSON and decode a JSON response.
    ///
    /// `vendor` is only used in log fields and error text.
    pub async fn post_json<Req, Resp>(
        &self,
        vendor: &str,
        url: &str,
        headers: HeaderMap,
        body: &Req,
    ) -> LlmResult<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        log_debug!(vendor = vendor, url = %url, "Sending vendor request");

        let response = self
            .client
            .post(url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(vendor, url, e))?;

        if !response.status().is_success() {
            return Err(handle_error_response(vendor, response).await);
        }

        let raw_body = response
            .text()
            .await
            .map_err(|e| self.transport_error(vendor, url, e))?;

        serde_json::from_str(&raw_body).map_err(|e| {
            log_error!(
                vendor = vendor,
                error = %e,
                raw_body = %raw_body.chars().take(500).collect::<String>(),
                "Failed to parse vendor response"
            );
            LlmError::response_parsing_error(format!("Invalid {vendor} response: {e}"))
        })
    }

    fn transport_error(&self, vendor: &str, url: &str, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            let secs = self.timeout.map(|t| t.as_secs()).unwrap_or_default();
            return LlmError::timeout(secs);
        }
        log_error!(vendor = vendor, url = %url, error = %e, "HTTP request failed");
        LlmError::request_failed(e.to_string(), Some(Box::new(e)))
    }
}

/// Map a non-success response to an error.
pub async fn handle_error_response(vendor: &str, response: reqwest::Response) -> LlmError {
    let status = response.status();
    let retry_after_seconds = extract_retry_after(response.headers());
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    log_error!(
        vendor = vendor,
        status = %status,
        error_text = %error_text,
        "API error response"
    );

    let message = vendor_error_message(&error_text).unwrap_or(error_text);
    match status.as_u16() {
        401 | 403 => {
            LlmError::authentication_failed(format!("{vendor} rejected the API key: {message}"))
        }
        429 => LlmError::rate_limit_exceeded(retry_after_seconds),
        _ => LlmError::request_failed(format!("API error {status}: {message}"), None),
    }
}

/// `error.message` from a vendor error body, when it has one.
///
/// OpenAI, DeepSeek, Anthropic and Gemini all use this shape.
pub fn vendor_error_message(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("error")?
        .get("message")?
        .as_str()
        .map(str::to_string)
}

/// Extract retry-after value from headers
pub fn extract_retry_after(headers: &HeaderMap) -> u64 {
    headers
        .get("retry-after")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

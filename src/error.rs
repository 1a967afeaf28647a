//! Error types for arena operations.
//!
//! This module provides structured error handling for provider calls and the
//! dispatch pipeline, including categorization, severity levels, and the
//! [`FailureKind`] that a failed generation carries into its result.
//!
//! # Error Types
//!
//! The main error type is [`LlmError`], which covers all failure modes:
//! - Configuration errors (missing API keys, invalid settings)
//! - Unknown providers and malformed `provider:model` identifiers
//! - Upstream failures (network issues, vendor error responses)
//! - Rate limiting, authentication failures and timeouts
//! - Malformed model output when JSON was requested
//!
//! # Example
//!
//! ```rust
//! use llm_arena::error::{ErrorSeverity, FailureKind, LlmError};
//!
//! let err = LlmError::configuration_error("OPENAI_API_KEY is not set");
//! assert_eq!(err.failure_kind(), FailureKind::Configuration);
//! assert_eq!(err.severity(), ErrorSeverity::Error);
//! ```

use crate::logging::{log_error, log_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Error categorization types
// ============================================================================

/// High-level categorization of errors for routing and handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// External service failures (LLM providers, network issues).
    External,

    /// Internal errors in the arena's own bookkeeping.
    Internal,

    /// Client errors (invalid input, authentication, configuration).
    ///
    /// The caller or operator made a mistake they can fix.
    Client,

    /// Temporary failures such as rate limits and timeouts.
    Transient,
}

/// Severity level for logging and alerting decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Action failed but the process is stable.
    Error,

    /// Unexpected but recoverable situation.
    Warning,

    /// Expected failure (e.g. validation error).
    Info,
}

/// Why a single generation failed.
///
/// This is what a failed [`GenerationResult`](crate::core_types::GenerationResult)
/// carries instead of a sentinel string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Missing or invalid credential / provider setting.
    Configuration,
    /// Network failure or vendor error response.
    Upstream,
    /// Vendor rate limiting.
    RateLimited,
    /// Vendor rejected the credential.
    Authentication,
    /// The call did not finish within the request timeout.
    Timeout,
    /// The vendor answered with something that could not be used.
    MalformedResponse,
    /// A fault in the arena itself (e.g. a panicking unit of work).
    Internal,
}

impl FailureKind {
    /// The snake_case name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Configuration => "configuration",
            Self::Upstream => "upstream",
            Self::RateLimited => "rate_limited",
            Self::Authentication => "authentication",
            Self::Timeout => "timeout",
            Self::MalformedResponse => "malformed_response",
            Self::Internal => "internal",
        }
    }
}

// ============================================================================
// LLM Error types
// ============================================================================

/// Convenient result type for arena operations.
pub type LlmResult<T> = std::result::Result<T, LlmError>;

/// Errors that can occur while talking to providers or dispatching a batch.
///
/// Use the constructor methods, which log the error at the appropriate level:
///
/// ```rust
/// use llm_arena::LlmError;
///
/// let err = LlmError::rate_limit_exceeded(30);
/// assert!(err.to_string().contains("30s"));
/// ```
///
/// | Variant | Category | Failure kind |
/// |---------|----------|--------------|
/// | `UnsupportedProvider` | Client | Configuration |
/// | `InvalidModelId` | Client | Configuration |
/// | `ConfigurationError` | Client | Configuration |
/// | `RequestFailed` | External | Upstream |
/// | `ResponseParsingError` | External | MalformedResponse |
/// | `RateLimitExceeded` | Transient | RateLimited |
/// | `Timeout` | Transient | Timeout |
/// | `AuthenticationFailed` | Client | Authentication |
/// | `MalformedJson` | External | MalformedResponse |
/// | `Internal` | Internal | Internal |
#[derive(Error, Debug)]
pub enum LlmError {
    /// The requested provider prefix is not registered.
    #[error("Provider not supported: {provider}")]
    UnsupportedProvider {
        /// The provider name that was requested.
        provider: String,
    },

    /// A `provider:model` identifier could not be parsed.
    #[error("Invalid model identifier '{value}': {reason}")]
    InvalidModelId {
        /// The raw identifier.
        value: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Provider configuration is invalid or incomplete.
    ///
    /// Most commonly a missing API key for the requested vendor.
    #[error("Provider configuration error: {message}")]
    ConfigurationError {
        /// Description of the configuration problem.
        message: String,
    },

    /// The HTTP request to the provider failed.
    #[error("Request failed: {message}")]
    RequestFailed {
        /// Description of the failure.
        message: String,
        /// The underlying error, if available.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse the provider's response envelope.
    #[error("Response parsing failed: {message}")]
    ResponseParsingError {
        /// Details about the parsing failure.
        message: String,
    },

    /// Provider rate limit exceeded.
    #[error("Rate limit exceeded, retry after {retry_after_seconds}s")]
    RateLimitExceeded {
        /// Recommended wait time before retrying.
        retry_after_seconds: u64,
    },

    /// Request timed out.
    #[error("Request timed out after {timeout_seconds}s")]
    Timeout {
        /// The timeout duration that was exceeded.
        timeout_seconds: u64,
    },

    /// Authentication with the provider failed.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Details about the authentication failure.
        message: String,
    },

    /// JSON output was requested but the model text is not JSON.
    #[error("Response could not be parsed as JSON")]
    MalformedJson {
        /// The fence-stripped text that failed to parse.
        text: String,
    },

    /// A fault in the arena's own bookkeeping.
    #[error("Internal error: {message}")]
    Internal {
        /// What went wrong.
        message: String,
    },
}

impl LlmError {
    /// Get the error category for routing and handling decisions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedProvider { .. } => ErrorCategory::Client,
            Self::InvalidModelId { .. } => ErrorCategory::Client,
            Self::ConfigurationError { .. } => ErrorCategory::Client,
            Self::RequestFailed { .. } => ErrorCategory::External,
            Self::ResponseParsingError { .. } => ErrorCategory::External,
            Self::RateLimitExceeded { .. } => ErrorCategory::Transient,
            Self::Timeout { .. } => ErrorCategory::Transient,
            Self::AuthenticationFailed { .. } => ErrorCategory::Client,
            Self::MalformedJson { .. } => ErrorCategory::External,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Get the error severity for logging and alerting.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnsupportedProvider { .. } => ErrorSeverity::Error,
            Self::InvalidModelId { .. } => ErrorSeverity::Error,
            Self::ConfigurationError { .. } => ErrorSeverity::Error,
            Self::RequestFailed { .. } => ErrorSeverity::Error,
            Self::ResponseParsingError { .. } => ErrorSeverity::Warning,
            Self::RateLimitExceeded { .. } => ErrorSeverity::Warning,
            Self::Timeout { .. } => ErrorSeverity::Warning,
            Self::AuthenticationFailed { .. } => ErrorSeverity::Error,
            Self::MalformedJson { .. } => ErrorSeverity::Info,
            Self::Internal { .. } => ErrorSeverity::Error,
        }
    }

    /// Classify this error for a failed generation result.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::UnsupportedProvider { .. }
            | Self::InvalidModelId { .. }
            | Self::ConfigurationError { .. } => FailureKind::Configuration,
            Self::RequestFailed { .. } => FailureKind::Upstream,
            Self::ResponseParsingError { .. } | Self::MalformedJson { .. } => {
                FailureKind::MalformedResponse
            }
            Self::RateLimitExceeded { .. } => FailureKind::RateLimited,
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::AuthenticationFailed { .. } => FailureKind::Authentication,
            Self::Internal { .. } => FailureKind::Internal,
        }
    }

    // =========================================================================
    // Constructor methods with automatic logging
    // =========================================================================

    /// Create an unsupported provider error (logs at ERROR level).
    pub fn unsupported_provider(provider: impl Into<String>) -> Self {
        let provider = provider.into();
        log_error!(
            provider = %provider,
            error_type = "unsupported_provider",
            "Unsupported LLM provider requested"
        );
        Self::UnsupportedProvider { provider }
    }

    pub fn invalid_model_id(value: impl Into<String>, reason: impl Into<String>) -> Self {
        let value = value.into();
        let reason = reason.into();
        log_error!(
            error_type = "invalid_model_id",
            value = %value,
            reason = %reason,
            "Malformed provider:model identifier"
        );
        Self::InvalidModelId { value, reason }
    }

    pub fn configuration_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "configuration_error",
            message = %message,
            "Provider configuration validation failed"
        );
        Self::ConfigurationError { message }
    }

    pub fn request_failed(
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        let message = message.into();
        log_error!(
            error_type = "request_failed",
            message = %message,
            has_source = source.is_some(),
            "LLM request execution failed"
        );
        Self::RequestFailed { message, source }
    }

    pub fn response_parsing_error(message: impl Into<String>) -> Self {
        let message = message.into();
        log_warn!(
            error_type = "response_parsing_error",
            message = %message,
            "LLM response format invalid"
        );
        Self::ResponseParsingError { message }
    }

    pub fn rate_limit_exceeded(retry_after_seconds: u64) -> Self {
        log_warn!(
            error_type = "rate_limit_exceeded",
            retry_after_seconds = retry_after_seconds,
            "LLM provider rate limit exceeded"
        );
        Self::RateLimitExceeded {
            retry_after_seconds,
        }
    }

    pub fn timeout(timeout_seconds: u64) -> Self {
        log_warn!(
            error_type = "timeout",
            timeout_seconds = timeout_seconds,
            "LLM request timed out"
        );
        Self::Timeout { timeout_seconds }
    }

    pub fn authentication_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "authentication_failed",
            message = %message,
            "LLM provider authentication failed"
        );
        Self::AuthenticationFailed { message }
    }

    pub fn malformed_json(text: impl Into<String>) -> Self {
        let text = text.into();
        log_warn!(
            error_type = "malformed_json",
            content_preview = text.chars().take(200).collect::<String>(),
            "Model output is not valid JSON"
        );
        Self::MalformedJson { text }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        log_error!(
            error_type = "internal",
            message = %message,
            "Arena bookkeeping fault"
        );
        Self::Internal { message }
    }
}

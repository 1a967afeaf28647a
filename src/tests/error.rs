// Unit Tests for Arena Error Handling
//
// UNIT UNDER TEST: LlmError, FailureKind
//
// BUSINESS RESPONSIBILITY:
//   - Categorizes failures so generation logs them at the right level
//   - Classifies each error into the FailureKind carried by a failed result
//   - Keeps the fixed JSON parse failure text used by POST /api/llm
//
// TEST COVERAGE:
//   - Category and severity per variant
//   - FailureKind mapping and its wire names
//   - Severity of vendor throttling and timeouts

use crate::error::{ErrorCategory, ErrorSeverity, FailureKind, LlmError};

mod categorization {
    use super::*;

    #[test]
    fn test_configuration_error_is_client_error() {
        // Arrange
        let message = "OPENAI_API_KEY environment variable is not set.";

        // Act
        let error = LlmError::configuration_error(message);

        // Assert
        assert_eq!(error.category(), ErrorCategory::Client);
        assert_eq!(error.severity(), ErrorSeverity::Error);
        assert_eq!(error.failure_kind(), FailureKind::Configuration);
        assert!(error.to_string().contains(message));
    }

    #[test]
    fn test_rate_limit_is_transient_failure() {
        // Arrange & Act
        let error = LlmError::rate_limit_exceeded(30);

        // Assert
        assert_eq!(error.category(), ErrorCategory::Transient);
        assert_eq!(error.severity(), ErrorSeverity::Warning);
        assert_eq!(error.failure_kind(), FailureKind::RateLimited);
    }

    #[test]
    fn test_timeout_maps_to_timeout_kind() {
        // Arrange & Act
        let error = LlmError::timeout(180);

        // Assert
        assert_eq!(error.failure_kind(), FailureKind::Timeout);
        assert_eq!(error.to_string(), "Request timed out after 180s");
    }

    #[test]
    fn test_throttling_and_timeouts_log_below_error_level() {
        // Arrange
        let transient = [LlmError::rate_limit_exceeded(5), LlmError::timeout(1)];

        // Act & Assert
        for error in &transient {
            assert_eq!(error.category(), ErrorCategory::Transient);
            assert_eq!(error.severity(), ErrorSeverity::Warning);
        }
        assert_eq!(
            LlmError::malformed_json("x").severity(),
            ErrorSeverity::Info
        );
        assert_eq!(
            LlmError::request_failed("refused", None).severity(),
            ErrorSeverity::Error
        );
    }

    #[test]
    fn test_unknown_provider_and_bad_id_are_configuration_failures() {
        // Arrange & Act
        let unknown = LlmError::unsupported_provider("unknown");
        let invalid = LlmError::invalid_model_id("gpt-4o", "missing ':' separator");

        // Assert
        assert_eq!(unknown.failure_kind(), FailureKind::Configuration);
        assert_eq!(invalid.failure_kind(), FailureKind::Configuration);
        assert_eq!(unknown.category(), ErrorCategory::Client);
    }

    #[test]
    fn test_request_failed_keeps_source() {
        // Arrange
        let source = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");

        // Act
        let error = LlmError::request_failed("connection dropped", Some(Box::new(source)));

        // Assert
        assert_eq!(error.category(), ErrorCategory::External);
        assert_eq!(error.failure_kind(), FailureKind::Upstream);
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_internal_error_is_internal_category() {
        let error = LlmError::internal("task panicked");

        assert_eq!(error.category(), ErrorCategory::Internal);
        assert_eq!(error.failure_kind(), FailureKind::Internal);
    }
}

mod messages {
    use super::*;

    #[test]
    fn test_malformed_json_has_fixed_display_text() {
        // Arrange & Act
        let error = LlmError::malformed_json("not json at all");

        // Assert
        assert_eq!(error.to_string(), "Response could not be parsed as JSON");
        assert_eq!(error.failure_kind(), FailureKind::MalformedResponse);
        assert!(matches!(error, LlmError::MalformedJson { ref text } if text == "not json at all"));
    }

    #[test]
    fn test_failure_kind_wire_names_match_serde() {
        for kind in [
            FailureKind::Configuration,
            FailureKind::Upstream,
            FailureKind::RateLimited,
            FailureKind::Authentication,
            FailureKind::Timeout,
            FailureKind::MalformedResponse,
            FailureKind::Internal,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.as_str());
        }
    }
}

// Unit Tests for fenced code and JSON extraction
//
// UNIT UNDER TEST: ResponseParser
//
// BUSINESS RESPONSIBILITY:
//   - Pulls code out of the first fenced block, optionally tagged html
//   - Uses the whole trimmed text when there is no fenced block
//   - Parses JSON answers after stripping any fence, with no repair

use crate::error::LlmError;
use crate::response_parser::ResponseParser;
use serde_json::json;

mod extract_code {
    use super::*;

    #[test]
    fn test_html_fence_is_extracted() {
        // Arrange
        let text = "Sure!\n```html\n<!DOCTYPE html>\n<html><body>hi</body></html>\n```\nHope it helps.";

        // Act
        let code = ResponseParser::extract_code(text);

        // Assert
        assert_eq!(code, "<!DOCTYPE html>\n<html><body>hi</body></html>");
    }

    #[test]
    fn test_untagged_fence_is_extracted() {
        let code = ResponseParser::extract_code("```\n<div>x</div>\n```");

        assert_eq!(code, "<div>x</div>");
    }

    #[test]
    fn test_only_first_block_is_used() {
        let text = "```html\n<p>one</p>\n```\nand\n```html\n<p>two</p>\n```";

        assert_eq!(ResponseParser::extract_code(text), "<p>one</p>");
    }

    #[test]
    fn test_text_without_fence_is_trimmed_whole() {
        let code = ResponseParser::extract_code("\n  <p>bare</p>  \n");

        assert_eq!(code, "<p>bare</p>");
    }
}

mod parse_json {
    use super::*;

    #[test]
    fn test_json_fence_is_stripped_before_parsing() {
        // Arrange
        let raw = "```json\n{\"number\": 42, \"roman\": \"XLII\"}\n```";

        // Act
        let value = ResponseParser::parse_json(raw).unwrap();

        // Assert
        assert_eq!(value, json!({"number": 42, "roman": "XLII"}));
    }

    #[test]
    fn test_bare_json_parses() {
        let value = ResponseParser::parse_json("  [1, 2, 3] ").unwrap();

        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn test_prose_is_malformed_json() {
        // Arrange
        let raw = "The answer is XLII.";

        // Act
        let err = ResponseParser::parse_json(raw).unwrap_err();

        // Assert
        assert!(matches!(err, LlmError::MalformedJson { .. }));
        assert_eq!(err.to_string(), "Response could not be parsed as JSON");
    }

    #[test]
    fn test_json_embedded_in_prose_is_not_repaired() {
        let err = ResponseParser::parse_json("Here: {\"a\": 1} done").unwrap_err();

        assert!(matches!(err, LlmError::MalformedJson { .. }));
    }
}

#[test]
fn test_strip_fence_markers_removes_every_marker() {
    let cleaned = ResponseParser::strip_fence_markers("```html\n<p>a</p>\n```");

    assert_eq!(cleaned, "<p>a</p>");
}

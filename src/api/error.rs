//! Errors returned by the forms service client

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection failure, timeout or other transport-level problem
    #[error("Failed to reach forms service: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Forms service returned {status}: {}", .detail.as_deref().unwrap_or("no details"))]
    Rejected { status: u16, detail: Option<String> },

    /// 2xx response whose body could not be decoded
    #[error("Unexpected response from forms service: {0}")]
    MalformedResponse(String),

    #[error("Invalid forms service URL '{0}'")]
    InvalidUrl(String),
}

impl ApiError {
    /// Message to show the user. The server's `detail` wins; a rejection
    /// without one falls back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ApiError::Rejected { detail: None, .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

/// Pull the `detail` field out of an error body.
///
/// Strings are returned as-is. Validation error lists are flattened to their
/// `msg` entries; any other shape is rendered as JSON.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let detail = value.get("detail")?;
    match detail {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                Some(detail.to_string())
            } else {
                Some(messages.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let body = br#"{"detail": "title required"}"#;
        assert_eq!(extract_detail(body), Some("title required".to_string()));
    }

    #[test]
    fn test_validation_list_detail() {
        let body = br#"{"detail": [
            {"loc": ["body", "title"], "msg": "field required", "type": "value_error.missing"},
            {"loc": ["body", "questions"], "msg": "value is not a valid list", "type": "type_error.list"}
        ]}"#;
        assert_eq!(
            extract_detail(body),
            Some("field required; value is not a valid list".to_string())
        );
    }

    #[test]
    fn test_structured_detail_without_msg() {
        let body = br#"{"detail": {"code": 42}}"#;
        assert_eq!(extract_detail(body), Some(r#"{"code":42}"#.to_string()));
    }

    #[test]
    fn test_missing_or_unparsable_detail() {
        assert_eq!(extract_detail(br#"{"error": "nope"}"#), None);
        assert_eq!(extract_detail(br#"{"detail": null}"#), None);
        assert_eq!(extract_detail(b"<html>502</html>"), None);
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let err = ApiError::Rejected {
            status: 400,
            detail: Some("title required".to_string()),
        };
        assert_eq!(err.user_message("Failed to create form"), "title required");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Rejected {
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message("Failed to create form"), "Failed to create form");
        assert_eq!(err.to_string(), "Forms service returned 500: no details");
    }

    #[test]
    fn test_malformed_response_message() {
        let err = ApiError::MalformedResponse("missing field `id`".to_string());
        assert_eq!(
            err.user_message("ignored"),
            "Unexpected response from forms service: missing field `id`"
        );
    }
}

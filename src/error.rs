//! Error types for Daizy API operations.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during Daizy API operations.
#[derive(Debug, Error)]
pub enum DaizyError {
    /// A required construction argument is missing or invalid.
    ///
    /// Raised before any network activity.
    #[error("{0}")]
    Validation(String),

    /// The configured host and path do not form a valid URL.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP transport error (DNS, connection refused, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A response body did not match the expected JSON shape.
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request body or CLI output could not be serialized.
    #[error("Failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The service answered with a non-200 status and a well-formed error body.
    #[error(transparent)]
    Response(#[from] ResponseError),
}

impl DaizyError {
    /// The structured service error, if this is one.
    pub fn response_error(&self) -> Option<&ResponseError> {
        match self {
            Self::Response(re) => Some(re),
            _ => None,
        }
    }

    /// HTTP status of a service error.
    pub fn status(&self) -> Option<u16> {
        self.response_error().map(|re| re.status)
    }
}

/// Result type alias for Daizy operations.
pub type Result<T> = core::result::Result<T, DaizyError>;

/// A single field-level error reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The request field the error refers to (e.g. `deviceId`).
    pub field: String,

    /// Machine-readable error tag (e.g. `NUMERIC`).
    #[serde(rename = "type")]
    pub error_type: String,

    /// Human-readable description.
    pub message: String,
}

/// Structured decode of a non-200 response body.
///
/// The wire shape is
/// `{"success": false, "errors": [{"field": .., "type": .., "message": ..}]}`.
/// The HTTP status is not part of the body; the client fills it in after
/// decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    /// Success flag as reported by the service (always `false` in practice).
    #[serde(default)]
    pub success: bool,

    /// HTTP status code observed by the client.
    #[serde(default, skip_serializing)]
    pub status: u16,

    /// Field-level errors, in the order the service reported them.
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl ResponseError {
    /// Message of the first field error, the error's primary message.
    pub fn message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }

    /// All field errors.
    pub fn field_errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.write_str(message),
            None => write!(f, "HTTP {}", self.status),
        }
    }
}

impl std::error::Error for ResponseError {}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMERIC_BODY: &str = r#"{
        "success": false,
        "errors": [
            {"field": "deviceId", "type": "NUMERIC", "message": "A numeric value is required"},
            {"field": "name", "type": "REQUIRED", "message": "Name is required"}
        ]
    }"#;

    #[test]
    fn test_response_error_message_is_first_entry() {
        let re: ResponseError = serde_json::from_str(NUMERIC_BODY).unwrap();
        assert_eq!(re.to_string(), "A numeric value is required");
        assert_eq!(re.field_errors().len(), 2);
        assert_eq!(re.errors[0].error_type, "NUMERIC");
        assert!(!re.success);
        // Status is never read from the body
        assert_eq!(re.status, 0);
    }

    #[test]
    fn test_response_error_without_entries_falls_back_to_status() {
        let re = ResponseError {
            success: false,
            status: 503,
            errors: vec![],
        };
        assert_eq!(re.message(), None);
        assert_eq!(re.to_string(), "HTTP 503");
    }

    #[test]
    fn test_daizy_error_is_transparent_for_service_errors() {
        let mut re: ResponseError = serde_json::from_str(NUMERIC_BODY).unwrap();
        re.status = 400;
        let err = DaizyError::from(re);

        assert_eq!(err.to_string(), "A numeric value is required");
        assert_eq!(err.status(), Some(400));
        assert!(err.response_error().is_some());
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = DaizyError::Validation("organisation ID is required".to_string());
        assert_eq!(err.to_string(), "organisation ID is required");
        assert_eq!(err.status(), None);
        assert!(err.response_error().is_none());
    }
}

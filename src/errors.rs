//! Typed error hierarchy for the issue reporter.
//!
//! Two top-level enums cover the two sides of the wire:
//! - `StoreError`: validation and lookup failures inside the issue store
//! - `ClientError`: failures surfaced by the HTTP client

use thiserror::Error;

/// Errors from the in-memory issue store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing fields: {}", fields.join(","))]
    MissingFields { fields: Vec<&'static str> },

    #[error("Status must be one of open|in-progress|resolved")]
    InvalidStatus { value: Option<String> },

    #[error("Issue not found")]
    IssueNotFound { id: String },
}

/// Errors from the reporter HTTP client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response; `message` is the body text or a default.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid response body: {0}")]
    Decode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_is_comma_joined() {
        let err = StoreError::MissingFields {
            fields: vec!["title", "location"],
        };
        assert_eq!(err.to_string(), "Missing fields: title,location");
    }

    #[test]
    fn invalid_status_carries_value() {
        let err = StoreError::InvalidStatus {
            value: Some("closed".into()),
        };
        match &err {
            StoreError::InvalidStatus { value } => assert_eq!(value.as_deref(), Some("closed")),
            _ => panic!("Expected InvalidStatus"),
        }
        assert!(err.to_string().contains("open|in-progress|resolved"));
    }

    #[test]
    fn not_found_message() {
        let err = StoreError::IssueNotFound { id: "nope".into() };
        assert_eq!(err.to_string(), "Issue not found");
    }

    #[test]
    fn api_error_displays_server_message() {
        let err = ClientError::Api {
            status: 400,
            message: "Missing fields: title".into(),
        };
        assert_eq!(err.to_string(), "Missing fields: title");
    }

    #[test]
    fn all_error_types_implement_std_error_trait() {
        fn assert_std_error<E: std::error::Error>(_: &E) {}
        assert_std_error(&StoreError::IssueNotFound { id: "x".into() });
        assert_std_error(&ClientError::Api {
            status: 500,
            message: "boom".into(),
        });
    }
}

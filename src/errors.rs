// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for the search endpoint

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong while answering a search
/// DOCUMENTATION: Every variant collapses into the same 500 `{"error": ...}` body;
/// the variants only exist so logs and tests can tell failures apart
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Falta API Key de Maps")]
    NotConfigured,

    #[error("{0}")]
    Request(String),

    /// Non-OK `status` field in the Places payload
    #[error("{}", format_status(.status, .message))]
    UpstreamStatus {
        status: String,
        message: Option<String>,
    },

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    InvalidBody(String),
}

fn format_status(status: &str, message: &Option<String>) -> String {
    match message {
        Some(msg) => format!("{} ({})", status, msg),
        None => status.to_string(),
    }
}

/// Convert SearchError to HTTP response
impl ResponseError for SearchError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_message_formatting() {
        let err = SearchError::UpstreamStatus {
            status: "REQUEST_DENIED".to_string(),
            message: Some("The provided API key is invalid.".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "REQUEST_DENIED (The provided API key is invalid.)"
        );

        let err = SearchError::UpstreamStatus {
            status: "UNKNOWN_ERROR".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "UNKNOWN_ERROR");
    }

    #[actix_web::test]
    async fn test_every_variant_renders_500_error_body() {
        let errors = vec![
            SearchError::NotConfigured,
            SearchError::Request("connection refused".to_string()),
            SearchError::Parse("missing field `name`".to_string()),
            SearchError::InvalidBody("expected value".to_string()),
        ];

        for err in errors {
            let expected = err.to_string();
            let response = err.error_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

            let body = to_bytes(response.into_body()).await.unwrap();
            let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
            assert_eq!(value, json!({ "error": expected }));
        }
    }
}

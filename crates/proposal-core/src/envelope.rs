// ABOUTME: Uniform JSON envelopes wrapping successful payloads and error responses
// ABOUTME: ErrorEnvelope always carries error, message, and a statusCode matching HTTP status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, ErrorCode};

/// Message returned to clients in place of internal error details
pub const GENERIC_INTERNAL_MESSAGE: &str = "Something went wrong while processing the request";

/// Error body shared by every non-2xx response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// HTTP reason phrase, e.g. `"Not Found"`
    pub error: String,
    /// Human readable explanation
    pub message: String,
    /// Mirrors the HTTP status code of the response
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl ErrorEnvelope {
    /// Build an envelope for an error code
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: code.title().to_owned(),
            message: message.into(),
            status_code: code.http_status(),
        }
    }

    /// Envelope for an unmatched route
    #[must_use]
    pub fn not_found(method: &str, path: &str) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("Route {method} {path} not found"),
        )
    }

    /// Envelope for an unhandled fault, never carrying internal detail
    #[must_use]
    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError, GENERIC_INTERNAL_MESSAGE)
    }

    /// Whether the envelope is consistent with the HTTP status it was sent with
    #[must_use]
    pub fn matches_status(&self, status: u16) -> bool {
        self.status_code == status && !self.error.is_empty()
    }
}

impl From<&AppError> for ErrorEnvelope {
    fn from(error: &AppError) -> Self {
        if error.code.is_internal() {
            Self::internal()
        } else {
            Self::new(error.code, error.message.clone())
        }
    }
}

/// Successful response wrapping a payload under `data`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// Response payload
    pub data: T,
    /// Optional human readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> DataEnvelope<T> {
    /// Wrap a payload without a message
    pub const fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    /// Wrap a payload with a message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(ErrorEnvelope::not_found("GET", "/api/v1/nope")).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["error"], "Not Found");
        assert_eq!(json["message"], "Route GET /api/v1/nope not found");
        assert!(json.get("status_code").is_none());
    }

    #[test]
    fn test_internal_errors_hide_their_message() {
        let error = AppError::internal("connection refused at 10.0.0.3:5432");
        let envelope = ErrorEnvelope::from(&error);
        assert_eq!(envelope.status_code, 500);
        assert_eq!(envelope.error, "Internal Server Error");
        assert!(!envelope.message.contains("10.0.0.3"));
    }

    #[test]
    fn test_client_errors_keep_their_message() {
        let envelope = ErrorEnvelope::from(&AppError::invalid_input("email is required"));
        assert_eq!(envelope.status_code, 400);
        assert_eq!(envelope.message, "email is required");
        assert!(envelope.matches_status(400));
        assert!(!envelope.matches_status(500));
    }

    #[test]
    fn test_data_envelope_omits_missing_message() {
        let json = serde_json::to_value(DataEnvelope::new(42)).unwrap();
        assert_eq!(json, serde_json::json!({ "data": 42 }));
    }
}

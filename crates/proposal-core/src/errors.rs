// ABOUTME: Contract violation and application error types with HTTP status mapping
// ABOUTME: Defines ContractError for shape mismatches and AppError/ErrorCode for responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

//! # Error Handling
//!
//! Two layers of errors live here:
//!
//! - [`ContractError`] describes a value that does not satisfy a declared
//!   shape (a shape mismatch). It is produced by the validating constructors
//!   and by deserialization of the contract types.
//! - [`AppError`] is what request handlers return. Each [`ErrorCode`] maps to
//!   an HTTP status and a short error title, and renders as the uniform
//!   [`ErrorEnvelope`](crate::envelope::ErrorEnvelope).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A received or constructed value violates the shared contract
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// `remaining` must never exceed `limit`
    #[error("rate limit remaining ({remaining}) exceeds limit ({limit})")]
    RateLimitExceedsLimit {
        /// Declared window limit
        limit: u32,
        /// Declared remaining quota
        remaining: u32,
    },

    /// `reset` is a Unix timestamp and cannot be negative
    #[error("rate limit reset must be a non-negative unix timestamp, got {reset}")]
    NegativeReset {
        /// Offending reset value
        reset: i64,
    },

    /// `reset` was issued in the past
    #[error("rate limit reset {reset} is earlier than issue time {now}")]
    ResetInPast {
        /// Offending reset value
        reset: i64,
        /// Issue time used for the check
        now: i64,
    },

    /// Audit action outside the closed enumeration
    #[error("unknown audit action '{0}'")]
    UnknownAuditAction(String),

    /// Uptime is negative or not a finite number
    #[error("uptime must be a finite, non-negative number of seconds")]
    InvalidUptime,

    /// Health status is `error` but no component explains why
    #[error("health status is 'error' but neither database nor ai_service reports a failure")]
    UnexplainedHealthError,

    /// API base URL is empty or not an http(s) URL
    #[error("invalid base URL '{0}': expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    /// A configured request header has an invalid name or value
    #[error("request header '{0}' is not a valid HTTP header")]
    InvalidRequestHeader(String),

    /// A header carrying contract metadata could not be parsed
    #[error("header '{name}' has an invalid value")]
    InvalidHeader {
        /// Header name
        name: &'static str,
    },
}

/// Standard error codes used by the HTTP surface
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Request payload or parameters are invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Credentials are missing or invalid
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid,
    /// Caller is authenticated but not allowed
    #[serde(rename = "PERMISSION_DENIED")]
    PermissionDenied,
    /// No handler or record matches the request
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// Caller exceeded its request quota
    #[serde(rename = "RATE_LIMIT_EXCEEDED")]
    RateLimitExceeded,
    /// A collaborator service failed
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError,
    /// Server configuration is invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// Any unhandled fault
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::AuthInvalid => 401,
            Self::PermissionDenied => 403,
            Self::ResourceNotFound => 404,
            Self::RateLimitExceeded => 429,
            Self::ExternalServiceError => 502,
            Self::ConfigError | Self::InternalError => 500,
        }
    }

    /// Short error title used in the `error` field of the envelope
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Bad Request",
            Self::AuthInvalid => "Unauthorized",
            Self::PermissionDenied => "Forbidden",
            Self::ResourceNotFound => "Not Found",
            Self::RateLimitExceeded => "Too Many Requests",
            Self::ExternalServiceError => "Bad Gateway",
            Self::ConfigError | Self::InternalError => "Internal Server Error",
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::AuthInvalid => "The provided authentication credentials are invalid",
            Self::PermissionDenied => "You do not have permission to perform this action",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::RateLimitExceeded => "Rate limit exceeded. Please slow down your requests",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
        }
    }

    /// Whether the message of an error with this code must stay server-side
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::ConfigError | Self::InternalError)
    }
}

/// Unified error type for request handlers
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Resource or route not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Invalid authentication
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<ContractError> for AppError {
    fn from(error: ContractError) -> Self {
        Self::invalid_input(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::invalid_input(format!("Malformed JSON: {error}"))
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(feature = "http-response")]
mod http_response {
    use super::AppError;
    use crate::envelope::ErrorEnvelope;
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::StatusCode;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if self.code.is_internal() {
                tracing::error!(
                    error.code = ?self.code,
                    error.message = %self.message,
                    error.source = ?self.source,
                    "Request failed with internal error"
                );
            } else {
                tracing::debug!(
                    error.code = ?self.code,
                    http.status = status.as_u16(),
                    "Request rejected: {}",
                    self.message
                );
            }

            (status, Json(ErrorEnvelope::from(&self))).into_response()
        }
    }
}

// ABOUTME: Process-wide API client configuration and per-call request options
// ABOUTME: Resolves per-call overrides against configured defaults for timeout, retries, headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::ContractError;

/// Default request timeout when nothing else is configured
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default number of retries when nothing else is configured
pub const DEFAULT_RETRIES: u32 = 3;

/// Per-call overrides; every field falls back to [`ApiConfig`] when absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Timeout in milliseconds
    #[serde(rename = "timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    /// Extra attempts after the first one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    /// Additional request headers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

impl RequestOptions {
    /// Override the timeout
    #[must_use]
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Override the retry count
    #[must_use]
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    /// Add a header for this call
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }
    /// Check that every per-call header could be sent
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidRequestHeader`] for the first invalid header
    pub fn validate(&self) -> Result<(), ContractError> {
        self.headers.as_ref().map_or(Ok(()), validate_headers)
    }
}

/// Header names must be RFC 9110 tokens; values must not contain control
/// characters other than horizontal tab
fn validate_headers(headers: &BTreeMap<String, String>) -> Result<(), ContractError> {
    const TOKEN_SYMBOLS: &[u8] = b"!#$%&'*+-.^_`|~";

    for (name, value) in headers {
        let name_ok = !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || TOKEN_SYMBOLS.contains(&b));
        let value_ok = value
            .bytes()
            .all(|b| b == b'\t' || (b >= 0x20 && b != 0x7f));
        if !name_ok || !value_ok {
            return Err(ContractError::InvalidRequestHeader(name.clone()));
        }
    }
    Ok(())
}

/// Resolved client configuration; every field is required on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all request paths are joined onto
    #[serde(rename = "baseURL")]
    pub base_url: String,
    /// Default timeout in milliseconds
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,
    /// Default extra attempts after the first one
    pub retries: u32,
    /// Headers sent with every request, may be empty
    pub headers: BTreeMap<String, String>,
}

impl ApiConfig {
    /// Configuration with default timeout, retries and no extra headers
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: DEFAULT_RETRIES,
            headers: BTreeMap::new(),
        }
    }

    /// Check that the base URL and default headers are usable
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidBaseUrl`] when the URL is empty or not
    /// http(s), [`ContractError::InvalidRequestHeader`] for a header that
    /// could never be sent
    pub fn validate(&self) -> Result<(), ContractError> {
        let url = self.base_url.trim();
        let has_host = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .is_some_and(|rest| !rest.is_empty());
        if !has_host {
            return Err(ContractError::InvalidBaseUrl(self.base_url.clone()));
        }
        validate_headers(&self.headers)
    }

    /// Join a request path onto the base URL
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Apply per-call options over the configured defaults
    ///
    /// Header names are compared case-insensitively and emitted in lowercase;
    /// the per-call value wins on collision.
    #[must_use]
    pub fn resolve(&self, options: &RequestOptions) -> ResolvedRequest {
        let mut headers: BTreeMap<String, String> = self
            .headers
            .iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value.clone()))
            .collect();
        if let Some(overrides) = &options.headers {
            headers.extend(
                overrides
                    .iter()
                    .map(|(name, value)| (name.to_ascii_lowercase(), value.clone())),
            );
        }

        ResolvedRequest {
            timeout: Duration::from_millis(options.timeout_ms.unwrap_or(self.timeout_ms)),
            retries: options.retries.unwrap_or(self.retries),
            headers,
        }
    }
}

/// Effective settings for a single call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// Timeout applied to each attempt
    pub timeout: Duration,
    /// Extra attempts after the first one
    pub retries: u32,
    /// Headers sent with the call, keyed by lowercase name
    pub headers: BTreeMap<String, String>,
}

impl ResolvedRequest {
    /// Total number of attempts including the first one
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_override_config() {
        let mut config = ApiConfig::new("http://localhost:3001");
        config.headers.insert("accept".into(), "application/json".into());
        config.headers.insert("x-client".into(), "web".into());

        let options = RequestOptions::default()
            .timeout_ms(500)
            .header("x-client", "cli");
        let resolved = config.resolve(&options);

        assert_eq!(resolved.timeout, Duration::from_millis(500));
        assert_eq!(resolved.retries, DEFAULT_RETRIES);
        assert_eq!(resolved.headers["x-client"], "cli");
        assert_eq!(resolved.headers["accept"], "application/json");
        assert_eq!(resolved.max_attempts(), DEFAULT_RETRIES + 1);
    }

    #[test]
    fn test_header_override_ignores_case() {
        let mut config = ApiConfig::new("http://localhost:3001");
        config.headers.insert("X-Client".into(), "web".into());

        let options = RequestOptions::default().header("x-client", "cli");
        let resolved = config.resolve(&options);

        assert_eq!(resolved.headers.len(), 1);
        assert_eq!(resolved.headers["x-client"], "cli");

        let uppercase_override = RequestOptions::default().header("X-CLIENT", "batch");
        let resolved = config.resolve(&uppercase_override);
        assert_eq!(resolved.headers.len(), 1);
        assert_eq!(resolved.headers["x-client"], "batch");
    }

    #[test]
    fn test_invalid_headers_rejected() {
        let mut config = ApiConfig::new("http://localhost:3001");
        config.headers.insert("bad header".into(), "v".into());
        assert_eq!(
            config.validate(),
            Err(ContractError::InvalidRequestHeader("bad header".into()))
        );

        let mut config = ApiConfig::new("http://localhost:3001");
        config.headers.insert("x-trace".into(), "line\r\nbreak".into());
        assert!(config.validate().is_err());

        let options = RequestOptions::default().header("", "empty name");
        assert!(options.validate().is_err());

        let options = RequestOptions::default()
            .header("Authorization", "Bearer abc.def")
            .header("x-note", "tab\tseparated");
        assert!(options.validate().is_ok());
        assert!(RequestOptions::default().validate().is_ok());
    }

    #[test]
    fn test_wire_names() {
        let config = ApiConfig::new("http://localhost:3001");
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["baseURL"], "http://localhost:3001");
        assert_eq!(json["timeout"], DEFAULT_TIMEOUT_MS);
        assert!(json["headers"].as_object().unwrap().is_empty());

        let options: RequestOptions = serde_json::from_str(r#"{"timeout": 1000}"#).unwrap();
        assert_eq!(options.timeout_ms, Some(1000));
        assert_eq!(options.retries, None);
    }

    #[test]
    fn test_config_requires_every_field() {
        let missing_headers = r#"{"baseURL": "http://x", "timeout": 1, "retries": 0}"#;
        assert!(serde_json::from_str::<ApiConfig>(missing_headers).is_err());

        let negative_retries = r#"{"baseURL": "http://x", "timeout": 1, "retries": -1, "headers": {}}"#;
        assert!(serde_json::from_str::<ApiConfig>(negative_retries).is_err());
    }

    #[test]
    fn test_base_url_validation() {
        assert!(ApiConfig::new("https://api.example.com").validate().is_ok());
        assert!(ApiConfig::new("").validate().is_err());
        assert!(ApiConfig::new("http://").validate().is_err());
        assert!(ApiConfig::new("ftp://files.example.com").validate().is_err());
    }

    #[test]
    fn test_url_joining() {
        let config = ApiConfig::new("http://localhost:3001/");
        assert_eq!(config.url_for("/health"), "http://localhost:3001/health");
        assert_eq!(config.url_for("api/v1"), "http://localhost:3001/api/v1");
    }
}

// ABOUTME: Authentication route handlers
// ABOUTME: Login delegates to the AuthenticationService and records a login audit entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use std::sync::Arc;

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use http::{header, HeaderMap};
use proposal_core::constants::paths;
use proposal_core::models::{LoginData, LoginRequest};
use proposal_core::{AuditAction, AuditLog, DataEnvelope};

use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::resources::ServerResources;

/// Message attached to a successful login
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";

/// Authentication routes
pub struct AuthRoutes;

impl AuthRoutes {
    /// Create all authentication routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(paths::AUTH_LOGIN, post(Self::handle_login))
            .with_state(resources)
    }

    /// Handle POST /api/v1/auth/login
    ///
    /// The body is parsed leniently: an empty or malformed body is treated as
    /// a request without credentials.
    async fn handle_login(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> AppResult<Json<DataEnvelope<LoginData>>> {
        let request = Self::parse_login_request(&body);
        let data = resources.auth_service.login(request).await?;
        AppLogger::log_auth_event(&data.user.id, "login", true);

        let mut entry = AuditLog::builder("users", &data.user.id, AuditAction::Login, &data.user.id);
        if let Some(ip) = client_ip(&headers) {
            entry = entry.ip_address(ip);
        }
        if let Some(agent) = header_str(&headers, header::USER_AGENT.as_str()) {
            entry = entry.user_agent(agent);
        }
        resources.audit.record(entry.build()).await?;

        Ok(Json(DataEnvelope::with_message(data, LOGIN_SUCCESS_MESSAGE)))
    }

    fn parse_login_request(body: &[u8]) -> LoginRequest {
        if body.iter().all(u8::is_ascii_whitespace) {
            return LoginRequest::default();
        }
        serde_json::from_slice(body).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Ignoring unparseable login body");
            LoginRequest::default()
        })
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// First address in `x-forwarded-for`, else `x-real-ip`
fn client_ip(headers: &HeaderMap) -> Option<&str> {
    header_str(headers, "x-forwarded-for")
        .and_then(|forwarded| forwarded.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .or_else(|| header_str(headers, "x-real-ip"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_login_body_parsing_is_lenient() {
        assert_eq!(AuthRoutes::parse_login_request(b""), LoginRequest::default());
        assert_eq!(AuthRoutes::parse_login_request(b"  \n"), LoginRequest::default());
        assert_eq!(AuthRoutes::parse_login_request(b"not json"), LoginRequest::default());

        let parsed = AuthRoutes::parse_login_request(br#"{"email":"a@b.tw"}"#);
        assert_eq!(parsed.email.as_deref(), Some("a@b.tw"));
        assert!(parsed.password.is_none());
    }

    #[test]
    fn test_client_ip_prefers_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("10.0.0.2"));
        assert_eq!(client_ip(&headers), Some("10.0.0.2"));

        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        assert_eq!(client_ip(&headers), Some("203.0.113.7"));
    }
}

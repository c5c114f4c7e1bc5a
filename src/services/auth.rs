// ABOUTME: Authentication capability used by the login route
// ABOUTME: Stub implementation accepts any credentials and returns a fixed user and tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use async_trait::async_trait;
use proposal_core::models::{LoginData, LoginRequest, UserSummary};
use proposal_core::AppResult;

/// Token returned by the stub for every login
pub const STUB_ACCESS_TOKEN: &str = "test-jwt-token";
/// Refresh token returned by the stub for every login
pub const STUB_REFRESH_TOKEN: &str = "test-refresh-token";

/// Verifies credentials and issues tokens
#[async_trait]
pub trait AuthenticationService: Send + Sync {
    /// Authenticate a login request
    async fn login(&self, request: LoginRequest) -> AppResult<LoginData>;
}

/// Authentication stub that performs no credential check
#[derive(Debug, Clone)]
pub struct StubAuthenticationService {
    user: UserSummary,
}

impl StubAuthenticationService {
    /// Stub returning the default test user
    #[must_use]
    pub fn new() -> Self {
        Self {
            user: UserSummary {
                id: "1".to_owned(),
                name: "Test User".to_owned(),
                email: "test@example.com".to_owned(),
            },
        }
    }

    /// Stub returning a specific user
    #[must_use]
    pub const fn with_user(user: UserSummary) -> Self {
        Self { user }
    }
}

impl Default for StubAuthenticationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthenticationService for StubAuthenticationService {
    async fn login(&self, request: LoginRequest) -> AppResult<LoginData> {
        tracing::debug!(
            email.present = request.email.is_some(),
            "Stub login accepted without credential check"
        );

        Ok(LoginData {
            user: self.user.clone(),
            token: STUB_ACCESS_TOKEN.to_owned(),
            refresh_token: STUB_REFRESH_TOKEN.to_owned(),
        })
    }
}

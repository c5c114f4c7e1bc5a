// ABOUTME: Health reporting for the mock server
// ABOUTME: Derives liveness and detailed component status from the server configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

//! Health checks
//!
//! The mock server has no live database or AI connections, so component status
//! is derived from whether the matching configuration is present.

use std::sync::Arc;
use std::time::Instant;

use proposal_core::constants::service;
use proposal_core::{AiServiceStatus, DatabaseStatus, HealthCheckResponse, MockHealthResponse};

use crate::config::ServerConfig;

/// Produces health responses
pub struct HealthChecker {
    config: Arc<ServerConfig>,
    start_time: Instant,
}

impl HealthChecker {
    /// Create a checker whose uptime starts now
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
        }
    }

    /// Liveness response served at `/health`
    #[must_use]
    pub fn basic() -> MockHealthResponse {
        MockHealthResponse::ok(service::HEALTH_MESSAGE)
    }

    /// Full report served at `/health/detailed`
    #[must_use]
    pub fn detailed(&self) -> HealthCheckResponse {
        HealthCheckResponse::from_components(
            self.uptime_seconds(),
            Some(env!("CARGO_PKG_VERSION").to_owned()),
            self.database_status(),
            self.ai_service_status(),
            self.config.environment.is_production(),
        )
    }

    /// Seconds since the checker was created
    #[must_use]
    pub fn uptime_seconds(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    fn database_status(&self) -> DatabaseStatus {
        if self.config.database_url.is_some() {
            DatabaseStatus::Connected
        } else {
            DatabaseStatus::Disconnected
        }
    }

    fn ai_service_status(&self) -> AiServiceStatus {
        if self.config.ai.has_provider() {
            AiServiceStatus::Available
        } else {
            AiServiceStatus::Unavailable
        }
    }
}

// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness probe plus a detailed report with component status and uptime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use proposal_core::constants::paths;
use proposal_core::{HealthCheckResponse, MockHealthResponse};

use crate::health::HealthChecker;
use crate::resources::ServerResources;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(paths::HEALTH, get(Self::handle_health))
            .route(paths::HEALTH_DETAILED, get(Self::handle_detailed))
            .with_state(resources)
    }

    /// Handle GET /health
    async fn handle_health() -> Json<MockHealthResponse> {
        Json(HealthChecker::basic())
    }

    /// Handle GET /health/detailed
    async fn handle_detailed(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<HealthCheckResponse> {
        let report = resources.health.detailed();
        if let Err(e) = report.check_conformance() {
            tracing::warn!(error = %e, "Health report does not conform to the contract");
        }
        Json(report)
    }
}

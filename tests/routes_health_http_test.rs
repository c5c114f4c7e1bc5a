// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Covers the liveness probe and the detailed contract-conformant report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use helpers::axum_test::AxumTestRequest;
use helpers::test_router;
use proposal_core::{HealthCheckResponse, HealthStatus, MockHealthResponse};
use proposal_mock_server::config::{AiServiceConfig, Environment, ServerConfig};
use proposal_mock_server::resources::ServerResources;
use proposal_mock_server::server::build_router;

fn router_with(config: ServerConfig) -> axum::Router {
    build_router(Arc::new(ServerResources::in_memory(Arc::new(config))))
}

// ============================================================================
// GET /health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health").send(test_router()).await;

    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["message"].is_string());
    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_health_is_message_only_variant() {
    let response = AxumTestRequest::get("/health").send(test_router()).await;
    let body: serde_json::Value = response.json();

    assert!(body.get("uptime").is_none());
    assert!(body.get("database").is_none());
    assert!(serde_json::from_value::<MockHealthResponse>(body).is_ok());
}

#[tokio::test]
async fn test_health_timestamps_do_not_go_backwards() {
    let router = test_router();
    let mut previous: Option<DateTime<Utc>> = None;

    for _ in 0..5 {
        let body: MockHealthResponse = AxumTestRequest::get("/health")
            .send(router.clone())
            .await
            .json();
        if let Some(previous) = previous {
            assert!(body.timestamp >= previous);
        }
        previous = Some(body.timestamp);
    }
}

// ============================================================================
// GET /health/detailed
// ============================================================================

#[tokio::test]
async fn test_detailed_health_conforms_in_development() {
    let response = AxumTestRequest::get("/health/detailed")
        .send(test_router())
        .await;
    assert_eq!(response.status(), 200);

    let report: HealthCheckResponse = response.json();
    assert_eq!(report.status, HealthStatus::Ok);
    assert!(report.uptime >= 0.0);
    assert_eq!(report.version.as_deref(), Some(env!("CARGO_PKG_VERSION")));
    assert!(report.check_conformance().is_ok());
}

#[tokio::test]
async fn test_detailed_health_wire_names() {
    let body: serde_json::Value = AxumTestRequest::get("/health/detailed")
        .send(test_router())
        .await
        .json();
    assert_eq!(body["database"], "disconnected");
    assert_eq!(body["ai_service"], "unavailable");
}

#[tokio::test]
async fn test_detailed_health_reports_error_in_degraded_production() {
    let router = router_with(ServerConfig {
        environment: Environment::Production,
        ..ServerConfig::default()
    });

    let report: HealthCheckResponse = AxumTestRequest::get("/health/detailed")
        .send(router)
        .await
        .json();
    assert_eq!(report.status, HealthStatus::Error);
    assert!(report.check_conformance().is_ok());
}

#[tokio::test]
async fn test_detailed_health_ok_when_configured() {
    let router = router_with(ServerConfig {
        environment: Environment::Production,
        database_url: Some("postgresql://localhost/proposals".into()),
        ai: AiServiceConfig {
            openai_api_key: None,
            google_api_key: Some("g-key".into()),
        },
        ..ServerConfig::default()
    });

    let body: serde_json::Value = AxumTestRequest::get("/health/detailed")
        .send(router)
        .await
        .json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
    assert_eq!(body["ai_service"], "available");
}

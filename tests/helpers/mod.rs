// ABOUTME: Shared helpers for integration tests
// ABOUTME: Builds routers and resources backed by the in-memory services

#![allow(dead_code)]

pub mod axum_test;

use std::sync::Arc;

use axum::Router;
use proposal_mock_server::config::ServerConfig;
use proposal_mock_server::resources::ServerResources;
use proposal_mock_server::server::build_router;
use proposal_mock_server::services::InMemoryAuditTrail;

/// Resources with default configuration and in-memory services
pub fn test_resources() -> Arc<ServerResources> {
    Arc::new(ServerResources::in_memory(Arc::new(ServerConfig::default())))
}

/// Full application router with default configuration
pub fn test_router() -> Router {
    build_router(test_resources())
}

/// Router plus a handle on its audit trail
pub fn test_router_with_audit() -> (Router, Arc<InMemoryAuditTrail>) {
    let audit = Arc::new(InMemoryAuditTrail::new());
    let resources = ServerResources::builder()
        .with_config(Arc::new(ServerConfig::default()))
        .with_audit(audit.clone())
        .build();
    (build_router(Arc::new(resources)), audit)
}

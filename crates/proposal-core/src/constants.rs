// ABOUTME: Route paths and fixed values shared by the mock server and its clients
// ABOUTME: Keeps the advertised endpoint map and the router in agreement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

/// API route paths
pub mod paths {
    /// Liveness probe
    pub const HEALTH: &str = "/health";
    /// Full health report following `HealthCheckResponse`
    pub const HEALTH_DETAILED: &str = "/health/detailed";
    /// Versioned API root
    pub const API_V1: &str = "/api/v1";
    /// Authentication route group
    pub const AUTH: &str = "/api/v1/auth";
    /// Login endpoint
    pub const AUTH_LOGIN: &str = "/api/v1/auth/login";
    /// Company route group
    pub const COMPANIES: &str = "/api/v1/companies";
    /// Basic company profile
    pub const COMPANIES_BASIC: &str = "/api/v1/companies/basic";
    /// Proposal template route group
    pub const TEMPLATES: &str = "/api/v1/templates";
    /// Proposal route group
    pub const PROPOSALS: &str = "/api/v1/proposals";
    /// AI generation route group
    pub const AI: &str = "/api/v1/ai";
    /// Document export route group
    pub const EXPORTS: &str = "/api/v1/exports";
}

/// Service identity
pub mod service {
    /// Service name used in logs and descriptors
    pub const NAME: &str = "proposal-mock-server";
    /// Descriptor message for the versioned API root
    pub const API_MESSAGE: &str = "智能標書產生器 API v1";
    /// Descriptor status for the versioned API root
    pub const API_STATUS_READY: &str = "ready";
    /// Message attached to the liveness probe
    pub const HEALTH_MESSAGE: &str = "Mock server is running";
}

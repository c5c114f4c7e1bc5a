// ABOUTME: Shared resource container handed to every route through axum state
// ABOUTME: Holds the configuration, service capabilities, and health checker behind Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

//! # Server Resources
//!
//! Routes receive `State<Arc<ServerResources>>` and call the capabilities it
//! holds. The builder defaults every capability to its in-memory
//! implementation so tests only override what they exercise.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::health::HealthChecker;
use crate::services::{
    AuditRecorder, AuthenticationService, CompanyDirectory, InMemoryAuditTrail,
    InMemoryCompanyDirectory, StubAuthenticationService,
};

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Process-wide configuration
    pub config: Arc<ServerConfig>,
    /// Login capability
    pub auth_service: Arc<dyn AuthenticationService>,
    /// Company lookups
    pub company_directory: Arc<dyn CompanyDirectory>,
    /// Audit destination
    pub audit: Arc<dyn AuditRecorder>,
    /// Health reporting
    pub health: Arc<HealthChecker>,
}

impl ServerResources {
    /// Create a new builder for `ServerResources`
    #[must_use]
    pub const fn builder() -> ServerResourcesBuilder {
        ServerResourcesBuilder::new()
    }

    /// Resources using the in-memory capabilities
    #[must_use]
    pub fn in_memory(config: Arc<ServerConfig>) -> Self {
        Self::builder().with_config(config).build()
    }
}

/// Builder for [`ServerResources`]
pub struct ServerResourcesBuilder {
    config: Option<Arc<ServerConfig>>,
    auth_service: Option<Arc<dyn AuthenticationService>>,
    company_directory: Option<Arc<dyn CompanyDirectory>>,
    audit: Option<Arc<dyn AuditRecorder>>,
}

impl ServerResourcesBuilder {
    /// Create an empty builder
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: None,
            auth_service: None,
            company_directory: None,
            audit: None,
        }
    }

    /// Set the server configuration
    #[must_use]
    pub fn with_config(mut self, config: Arc<ServerConfig>) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the authentication service
    #[must_use]
    pub fn with_auth_service(mut self, service: Arc<dyn AuthenticationService>) -> Self {
        self.auth_service = Some(service);
        self
    }

    /// Set the company directory
    #[must_use]
    pub fn with_company_directory(mut self, directory: Arc<dyn CompanyDirectory>) -> Self {
        self.company_directory = Some(directory);
        self
    }

    /// Set the audit recorder
    #[must_use]
    pub fn with_audit(mut self, audit: Arc<dyn AuditRecorder>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Build the resources, filling gaps with defaults
    #[must_use]
    pub fn build(self) -> ServerResources {
        let config = self.config.unwrap_or_default();
        ServerResources {
            health: Arc::new(HealthChecker::new(Arc::clone(&config))),
            auth_service: self
                .auth_service
                .unwrap_or_else(|| Arc::new(StubAuthenticationService::new())),
            company_directory: self
                .company_directory
                .unwrap_or_else(|| Arc::new(InMemoryCompanyDirectory::new())),
            audit: self
                .audit
                .unwrap_or_else(|| Arc::new(InMemoryAuditTrail::new())),
            config,
        }
    }
}

impl Default for ServerResourcesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

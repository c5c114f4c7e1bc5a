// ABOUTME: Versioned API root describing the service and its route groups
// ABOUTME: Serves the ServiceDescriptor at /api/v1
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use axum::{routing::get, Json, Router};
use proposal_core::constants::{paths, service};
use proposal_core::models::{EndpointMap, ServiceDescriptor};

/// API root routes
pub struct ApiInfoRoutes;

impl ApiInfoRoutes {
    /// Create the API root route
    pub fn routes() -> Router {
        Router::new().route(paths::API_V1, get(Self::handle_root))
    }

    /// Handle GET /api/v1
    async fn handle_root() -> Json<ServiceDescriptor> {
        Json(ServiceDescriptor {
            message: service::API_MESSAGE.to_owned(),
            status: service::API_STATUS_READY.to_owned(),
            endpoints: EndpointMap::default(),
        })
    }
}

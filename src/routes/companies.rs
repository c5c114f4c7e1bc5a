// ABOUTME: Company route handlers
// ABOUTME: Serves the basic company profile from the CompanyDirectory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use proposal_core::constants::paths;
use proposal_core::models::CompanyRecord;
use proposal_core::DataEnvelope;

use crate::errors::AppResult;
use crate::resources::ServerResources;

/// Company routes
pub struct CompanyRoutes;

impl CompanyRoutes {
    /// Create all company routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(paths::COMPANIES_BASIC, get(Self::handle_basic))
            .with_state(resources)
    }

    /// Handle GET /api/v1/companies/basic
    async fn handle_basic(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<DataEnvelope<CompanyRecord>>> {
        let company = resources.company_directory.basic_profile().await?;
        Ok(Json(DataEnvelope::new(company)))
    }
}

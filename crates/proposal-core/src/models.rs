// ABOUTME: Payload shapes served by the mock endpoints and accepted by login
// ABOUTME: User, login, company, and service descriptor models with their wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use serde::{Deserialize, Serialize};

use crate::constants::paths;

/// Credentials posted to the login endpoint.
///
/// Both fields are optional so that a stub backend can accept any body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account e-mail
    #[serde(default)]
    pub email: Option<String>,
    /// Account password
    #[serde(default)]
    pub password: Option<String>,
}

/// Public user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// User identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// E-mail address
    pub email: String,
}

/// Successful login payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    /// Authenticated user
    pub user: UserSummary,
    /// Access token
    pub token: String,
    /// Token used to obtain a new access token
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

/// Basic company profile used to pre-fill proposals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Company identifier
    pub id: String,
    /// Registered company name
    pub company_name: String,
    /// Tax identification number
    pub tax_id: String,
    /// Postal address
    pub address: String,
    /// Phone number
    pub phone: String,
    /// Contact e-mail
    pub email: String,
}

/// Route groups advertised by the API root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointMap {
    /// Health probe
    pub health: String,
    /// Authentication
    pub auth: String,
    /// Company data
    pub companies: String,
    /// Proposal templates
    pub templates: String,
    /// Proposals
    pub proposals: String,
    /// AI generation
    pub ai: String,
    /// Document export
    pub exports: String,
}

impl Default for EndpointMap {
    fn default() -> Self {
        Self {
            health: paths::HEALTH.to_owned(),
            auth: paths::AUTH.to_owned(),
            companies: paths::COMPANIES.to_owned(),
            templates: paths::TEMPLATES.to_owned(),
            proposals: paths::PROPOSALS.to_owned(),
            ai: paths::AI.to_owned(),
            exports: paths::EXPORTS.to_owned(),
        }
    }
}

/// Body of the versioned API root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    /// Service banner
    pub message: String,
    /// Readiness marker
    pub status: String,
    /// Available route groups
    pub endpoints: EndpointMap,
}

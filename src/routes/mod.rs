// ABOUTME: Route module organization for the proposal mock server
// ABOUTME: One route struct per domain plus the shared error boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

//! Route module
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the capabilities in [`crate::resources::ServerResources`].

/// Versioned API root
pub mod api_info;
/// Authentication routes
pub mod auth;
/// Company routes
pub mod companies;
/// Not-found and panic boundaries
pub mod fallback;
/// Health check routes
pub mod health;

pub use api_info::ApiInfoRoutes;
pub use auth::AuthRoutes;
pub use companies::CompanyRoutes;
pub use fallback::with_error_boundaries;
pub use health::HealthRoutes;

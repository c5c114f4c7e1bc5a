// ABOUTME: Main library entry point for the proposal generator mock backend
// ABOUTME: Serves the shared API contract over HTTP and provides a typed client for it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

#![deny(unsafe_code)]

//! # Proposal Mock Server
//!
//! Development backend for the 智能標書產生器 (AI-assisted proposal
//! generator). It serves canned responses that follow the shared contract in
//! `proposal-core`, so the frontend can be built before the real backend.
//!
//! ## Architecture
//!
//! - **Config**: `ServerConfig` read once from the environment
//! - **Services**: capability traits with in-memory implementations
//! - **Routes**: thin axum handlers over the services
//! - **Middleware**: request ids, CORS, rate limit headers
//! - **Client**: `reqwest` client honoring `ApiConfig` and `RequestOptions`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use proposal_mock_server::config::ServerConfig;
//! use proposal_mock_server::resources::ServerResources;
//! use proposal_mock_server::server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     let resources = Arc::new(ServerResources::in_memory(config));
//!     Server::new(resources).run().await
//! }
//! ```

/// Typed HTTP client
pub mod client;

/// Environment configuration
pub mod config;

/// Error types and HTTP mapping
pub mod errors;

/// Health reporting
pub mod health;

/// Structured logging
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared resource container
pub mod resources;

/// HTTP routes
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

/// Capability traits and in-memory implementations
pub mod services;

pub use proposal_core as contract;

// ABOUTME: Shared API contract for the proposal generator backend and frontend clients
// ABOUTME: Foundation crate with request/response shapes, runtime validators, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

#![deny(unsafe_code)]

//! # Proposal Core
//!
//! Single source of truth for the data shapes exchanged between the proposal
//! generator backend and its clients. The crate performs no I/O. Every type
//! that can arrive from an untrusted peer validates itself while being
//! deserialized, so a value of one of these types is always conformant.
//!
//! ## Modules
//!
//! - **api**: Client configuration (`ApiConfig`) and per-call `RequestOptions`
//! - **health**: `HealthCheckResponse` and the mock server's message-only variant
//! - **rate_limit**: `RateLimitInfo` with the `remaining <= limit` invariant
//! - **audit**: Closed `AuditAction` set and the append-only `AuditLog` record
//! - **envelope**: Uniform data and error envelopes
//! - **models**: Payloads served by the mock endpoints
//! - **errors**: `ContractError`, `ErrorCode` and `AppError`

/// Client configuration and per-call request options
pub mod api;

/// Audit log records and the closed action set
pub mod audit;

/// Route paths and fixed values shared by server and clients
pub mod constants;

/// Uniform response envelopes
pub mod envelope;

/// Contract violations and application errors with HTTP mapping
pub mod errors;

/// Health check response shapes
pub mod health;

/// Payloads served by the mock endpoints
pub mod models;

/// Rate limit metadata
pub mod rate_limit;

pub use api::{ApiConfig, RequestOptions, ResolvedRequest};
pub use audit::{AuditAction, AuditLog, AuditLogBuilder};
pub use envelope::{DataEnvelope, ErrorEnvelope};
pub use errors::{AppError, AppResult, ContractError, ErrorCode};
pub use health::{
    AiServiceStatus, DatabaseStatus, HealthCheckResponse, HealthStatus, MockHealthResponse,
};
pub use rate_limit::RateLimitInfo;

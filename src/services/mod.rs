// ABOUTME: Domain service layer behind the HTTP routes
// ABOUTME: Capability traits with in-memory implementations used by the mock server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

//! Services
//!
//! Route handlers never hardcode responses; they call one of these
//! capabilities. The mock server wires the in-memory implementations, a real
//! deployment supplies its own.

/// Append-only audit trail
pub mod audit;
/// Authentication capability
pub mod auth;
/// Company directory capability
pub mod companies;

pub use audit::{AuditRecorder, InMemoryAuditTrail};
pub use auth::{AuthenticationService, StubAuthenticationService};
pub use companies::{CompanyDirectory, InMemoryCompanyDirectory};

// ABOUTME: HTTP middleware for the mock server
// ABOUTME: CORS, request correlation ids, and rate limit header mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

/// Cross-origin configuration for the frontend
pub mod cors;
/// Rate limit metadata to and from HTTP headers
pub mod rate_limiting;
/// Request id propagation
pub mod request_id;

pub use cors::setup_cors;
pub use rate_limiting::{rate_limit_from_headers, rate_limit_headers};
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};

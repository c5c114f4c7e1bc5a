// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Allows the configured frontend origin to call the API from a browser
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::ServerConfig;

/// Configure CORS for the frontend origin
///
/// The origin comes from `FRONTEND_URL`. A value that is not a valid header
/// falls back to allowing any origin, which only makes sense outside
/// production, so a warning is logged.
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin = match HeaderValue::from_str(config.frontend_url.trim_end_matches('/')) {
        Ok(origin) => AllowOrigin::list([origin]),
        Err(e) => {
            warn!(
                frontend_url = %config.frontend_url,
                error = %e,
                "Invalid FRONTEND_URL, allowing any origin"
            );
            AllowOrigin::any()
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([
            HeaderName::from_static("x-request-id"),
            HeaderName::from_static("x-ratelimit-limit"),
            HeaderName::from_static("x-ratelimit-remaining"),
            HeaderName::from_static("x-ratelimit-reset"),
            HeaderName::from_static("retry-after"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
}

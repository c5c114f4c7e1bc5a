// ABOUTME: Rate limit metadata carried in HTTP headers
// ABOUTME: Maps RateLimitInfo to X-RateLimit-* and Retry-After headers and back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

//! # Rate Limit Headers
//!
//! The mock server does not throttle. These helpers let a throttling layer
//! or a client exchange [`RateLimitInfo`] over standard headers.

use http::{HeaderMap, HeaderValue};
use proposal_core::{ContractError, RateLimitInfo};

/// HTTP header names for rate limiting
pub mod headers {
    /// Maximum requests allowed in the current window
    pub const X_RATE_LIMIT_LIMIT: &str = "X-RateLimit-Limit";
    /// Remaining requests in the current window
    pub const X_RATE_LIMIT_REMAINING: &str = "X-RateLimit-Remaining";
    /// Unix timestamp when the window resets
    pub const X_RATE_LIMIT_RESET: &str = "X-RateLimit-Reset";
    /// Seconds to wait before retrying
    pub const RETRY_AFTER: &str = "Retry-After";
}

/// Create a `HeaderMap` with rate limit headers
#[must_use]
pub fn rate_limit_headers(info: &RateLimitInfo) -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(headers::X_RATE_LIMIT_LIMIT, HeaderValue::from(info.limit()));
    map.insert(
        headers::X_RATE_LIMIT_REMAINING,
        HeaderValue::from(info.remaining()),
    );
    map.insert(headers::X_RATE_LIMIT_RESET, HeaderValue::from(info.reset()));
    if let Some(retry_after) = info.retry_after() {
        map.insert(headers::RETRY_AFTER, HeaderValue::from(retry_after));
    }
    map
}

/// Read rate limit metadata from response headers
///
/// Returns `Ok(None)` when the limit, remaining and reset headers are all
/// absent.
///
/// # Errors
///
/// Returns an error if only some of the headers are present, a value is not
/// numeric, or the values violate [`RateLimitInfo`] invariants
pub fn rate_limit_from_headers(map: &HeaderMap) -> Result<Option<RateLimitInfo>, ContractError> {
    let limit = header_number::<u32>(map, headers::X_RATE_LIMIT_LIMIT)?;
    let remaining = header_number::<u32>(map, headers::X_RATE_LIMIT_REMAINING)?;
    let reset = header_number::<i64>(map, headers::X_RATE_LIMIT_RESET)?;
    let retry_after = header_number::<u64>(map, headers::RETRY_AFTER)?;

    match (limit, remaining, reset) {
        (None, None, None) => Ok(None),
        (Some(limit), Some(remaining), Some(reset)) => {
            RateLimitInfo::new(limit, remaining, reset, retry_after).map(Some)
        }
        (None, _, _) => Err(ContractError::InvalidHeader {
            name: headers::X_RATE_LIMIT_LIMIT,
        }),
        (_, None, _) => Err(ContractError::InvalidHeader {
            name: headers::X_RATE_LIMIT_REMAINING,
        }),
        (_, _, None) => Err(ContractError::InvalidHeader {
            name: headers::X_RATE_LIMIT_RESET,
        }),
    }
}

fn header_number<T: std::str::FromStr>(
    map: &HeaderMap,
    name: &'static str,
) -> Result<Option<T>, ContractError> {
    map.get(name)
        .map(|value| {
            value
                .to_str()
                .ok()
                .and_then(|text| text.trim().parse().ok())
                .ok_or(ContractError::InvalidHeader { name })
        })
        .transpose()
}

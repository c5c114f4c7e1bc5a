// ABOUTME: Rate limit metadata returned to throttled API consumers
// ABOUTME: Validating constructor and deserializer enforce remaining <= limit and reset >= 0
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use serde::{Deserialize, Serialize};

use crate::errors::ContractError;

/// Quota state for the current rate limit window.
///
/// Instances can only be created through [`RateLimitInfo::new`] or
/// deserialization, both of which validate, so `remaining <= limit` and
/// `reset >= 0` hold for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRateLimitInfo")]
pub struct RateLimitInfo {
    limit: u32,
    remaining: u32,
    reset: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    retry_after: Option<u64>,
}

/// Unvalidated wire shape
#[derive(Deserialize)]
struct RawRateLimitInfo {
    limit: u32,
    remaining: u32,
    reset: i64,
    #[serde(default)]
    retry_after: Option<u64>,
}

impl TryFrom<RawRateLimitInfo> for RateLimitInfo {
    type Error = ContractError;

    fn try_from(raw: RawRateLimitInfo) -> Result<Self, Self::Error> {
        Self::new(raw.limit, raw.remaining, raw.reset, raw.retry_after)
    }
}

impl RateLimitInfo {
    /// Create rate limit metadata
    ///
    /// # Errors
    ///
    /// Returns an error if `remaining > limit` or `reset` is negative
    pub fn new(
        limit: u32,
        remaining: u32,
        reset: i64,
        retry_after: Option<u64>,
    ) -> Result<Self, ContractError> {
        if remaining > limit {
            return Err(ContractError::RateLimitExceedsLimit { limit, remaining });
        }
        if reset < 0 {
            return Err(ContractError::NegativeReset { reset });
        }

        Ok(Self {
            limit,
            remaining,
            reset,
            retry_after,
        })
    }

    /// Create metadata that is being issued at `now` (Unix seconds)
    ///
    /// # Errors
    ///
    /// Same as [`RateLimitInfo::new`], and additionally fails when `reset < now`
    pub fn issued_at(
        now: i64,
        limit: u32,
        remaining: u32,
        reset: i64,
        retry_after: Option<u64>,
    ) -> Result<Self, ContractError> {
        let info = Self::new(limit, remaining, reset, retry_after)?;
        if reset < now {
            return Err(ContractError::ResetInPast { reset, now });
        }
        Ok(info)
    }

    /// Maximum requests per window
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Requests left in the current window
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Unix timestamp (seconds) at which the window resets
    #[must_use]
    pub const fn reset(&self) -> i64 {
        self.reset
    }

    /// Seconds the caller should wait before retrying
    #[must_use]
    pub const fn retry_after(&self) -> Option<u64> {
        self.retry_after
    }

    /// Whether the quota for this window is used up
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_cannot_exceed_limit() {
        assert_eq!(
            RateLimitInfo::new(10, 11, 0, None),
            Err(ContractError::RateLimitExceedsLimit {
                limit: 10,
                remaining: 11
            })
        );
        assert!(RateLimitInfo::new(10, 10, 0, None).is_ok());
        assert!(RateLimitInfo::new(0, 0, 0, None).unwrap().is_exhausted());
    }

    #[test]
    fn test_negative_reset_rejected() {
        assert_eq!(
            RateLimitInfo::new(10, 1, -5, None),
            Err(ContractError::NegativeReset { reset: -5 })
        );
    }

    #[test]
    fn test_issue_time_check() {
        let now = 1_700_000_000;
        assert!(RateLimitInfo::issued_at(now, 100, 5, now + 60, Some(60)).is_ok());
        assert_eq!(
            RateLimitInfo::issued_at(now, 100, 5, now - 1, None),
            Err(ContractError::ResetInPast {
                reset: now - 1,
                now
            })
        );
    }

    #[test]
    fn test_deserialization_validates() {
        let invalid = r#"{"limit": 5, "remaining": 6, "reset": 1700000000}"#;
        let error = serde_json::from_str::<RateLimitInfo>(invalid).unwrap_err();
        assert!(error.to_string().contains("exceeds limit"));

        let valid = r#"{"limit": 5, "remaining": 2, "reset": 1700000000, "retry_after": 30}"#;
        let info: RateLimitInfo = serde_json::from_str(valid).unwrap();
        assert_eq!(info.remaining(), 2);
        assert_eq!(info.retry_after(), Some(30));
    }

    #[test]
    fn test_serialization_omits_absent_retry_after() {
        let info = RateLimitInfo::new(100, 99, 1_700_000_000, None).unwrap();
        let json = serde_json::to_value(info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "limit": 100, "remaining": 99, "reset": 1_700_000_000_i64 })
        );
    }
}

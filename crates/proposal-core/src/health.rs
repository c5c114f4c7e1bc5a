// ABOUTME: Health check response shapes shared by the backend and its monitors
// ABOUTME: Full HealthCheckResponse with conformance checks plus the mock's message-only variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ContractError;

/// Overall service status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is operating normally
    Ok,
    /// Service is impaired
    Error,
}

/// Database connectivity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    /// Database reachable
    Connected,
    /// Database unreachable or not configured
    Disconnected,
}

/// AI generation service availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiServiceStatus {
    /// At least one AI provider can be used
    Available,
    /// No AI provider can be used
    Unavailable,
}

/// Health check response as declared by the shared contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall status
    pub status: HealthStatus,
    /// Time the response was produced (RFC 3339)
    pub timestamp: DateTime<Utc>,
    /// Seconds since the service started
    pub uptime: f64,
    /// Service version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Database connectivity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseStatus>,
    /// AI service availability
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_service: Option<AiServiceStatus>,
}

impl HealthCheckResponse {
    /// Derive the overall status from component states.
    ///
    /// `strict` turns a degraded component into `error`; otherwise the service
    /// reports `ok` and lets the component fields speak for themselves.
    #[must_use]
    pub fn from_components(
        uptime: f64,
        version: Option<String>,
        database: DatabaseStatus,
        ai_service: AiServiceStatus,
        strict: bool,
    ) -> Self {
        let degraded =
            database == DatabaseStatus::Disconnected || ai_service == AiServiceStatus::Unavailable;
        let status = if strict && degraded {
            HealthStatus::Error
        } else {
            HealthStatus::Ok
        };

        Self {
            status,
            timestamp: Utc::now(),
            uptime,
            version,
            database: Some(database),
            ai_service: Some(ai_service),
        }
    }

    /// Verify the semantic rules the type system cannot express
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidUptime`] for a negative or non-finite
    /// uptime and [`ContractError::UnexplainedHealthError`] when an `error`
    /// status has no failing component to explain it.
    pub fn check_conformance(&self) -> Result<(), ContractError> {
        if !self.uptime.is_finite() || self.uptime < 0.0 {
            return Err(ContractError::InvalidUptime);
        }

        if self.status == HealthStatus::Error {
            let explained = self.database == Some(DatabaseStatus::Disconnected)
                || self.ai_service == Some(AiServiceStatus::Unavailable);
            if !explained {
                return Err(ContractError::UnexplainedHealthError);
            }
        }

        Ok(())
    }
}

/// Message-only health body served by the mock `GET /health` route.
///
/// This shape does not carry `uptime`, `version`, `database` or `ai_service`
/// and therefore is not a [`HealthCheckResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockHealthResponse {
    /// Always `ok` for the mock
    pub status: HealthStatus,
    /// Time the response was produced (RFC 3339)
    pub timestamp: DateTime<Utc>,
    /// Free-form status message
    pub message: String,
}

impl MockHealthResponse {
    /// Build an `ok` response stamped with the current time
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: HealthStatus::Ok,
            timestamp: Utc::now(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: HealthStatus) -> HealthCheckResponse {
        HealthCheckResponse {
            status,
            timestamp: Utc::now(),
            uptime: 12.5,
            version: Some("0.1.0".into()),
            database: None,
            ai_service: None,
        }
    }

    #[test]
    fn test_status_literals() {
        assert_eq!(serde_json::to_value(HealthStatus::Ok).unwrap(), "ok");
        assert_eq!(serde_json::to_value(HealthStatus::Error).unwrap(), "error");
        assert!(serde_json::from_str::<HealthStatus>(r#""healthy""#).is_err());
        assert_eq!(
            serde_json::to_value(AiServiceStatus::Unavailable).unwrap(),
            "unavailable"
        );
    }

    #[test]
    fn test_required_fields_enforced_on_ingress() {
        let missing_uptime = r#"{"status":"ok","timestamp":"2025-01-01T00:00:00Z"}"#;
        assert!(serde_json::from_str::<HealthCheckResponse>(missing_uptime).is_err());

        let bad_timestamp = r#"{"status":"ok","timestamp":"yesterday","uptime":1}"#;
        assert!(serde_json::from_str::<HealthCheckResponse>(bad_timestamp).is_err());

        let minimal = r#"{"status":"ok","timestamp":"2025-01-01T00:00:00Z","uptime":1}"#;
        let parsed: HealthCheckResponse = serde_json::from_str(minimal).unwrap();
        assert!(parsed.check_conformance().is_ok());
    }

    #[test]
    fn test_error_status_must_be_explained() {
        let unexplained = response(HealthStatus::Error);
        assert_eq!(
            unexplained.check_conformance(),
            Err(ContractError::UnexplainedHealthError)
        );

        let mut explained = response(HealthStatus::Error);
        explained.database = Some(DatabaseStatus::Disconnected);
        assert!(explained.check_conformance().is_ok());
    }

    #[test]
    fn test_negative_uptime_rejected() {
        let mut negative = response(HealthStatus::Ok);
        negative.uptime = -1.0;
        assert_eq!(negative.check_conformance(), Err(ContractError::InvalidUptime));

        negative.uptime = f64::NAN;
        assert_eq!(negative.check_conformance(), Err(ContractError::InvalidUptime));
    }

    #[test]
    fn test_from_components_is_always_conformant() {
        for strict in [false, true] {
            for database in [DatabaseStatus::Connected, DatabaseStatus::Disconnected] {
                for ai in [AiServiceStatus::Available, AiServiceStatus::Unavailable] {
                    let health = HealthCheckResponse::from_components(3.0, None, database, ai, strict);
                    assert!(health.check_conformance().is_ok());
                }
            }
        }
    }
}

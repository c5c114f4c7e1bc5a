// ABOUTME: Append-only audit log records for auditable mutations
// ABOUTME: Closed AuditAction set with strict parsing and an immutable AuditLog builder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

//! # Audit Log
//!
//! One [`AuditLog`] is created per auditable mutation and never changes
//! afterwards. The type exposes read accessors only; the builder is the sole
//! way to assemble a record in code, and deserialization is the other.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::ContractError;

/// Kind of action an audit entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    /// Record created
    Create,
    /// Record changed
    Update,
    /// Record removed
    Delete,
    /// User signed in
    Login,
    /// User signed out
    Logout,
    /// Document exported
    Export,
    /// Content generated by the AI service
    Generate,
}

impl AuditAction {
    /// Every member of the closed set
    pub const ALL: [Self; 7] = [
        Self::Create,
        Self::Update,
        Self::Delete,
        Self::Login,
        Self::Logout,
        Self::Export,
        Self::Generate,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Login => "login",
            Self::Logout => "logout",
            Self::Export => "export",
            Self::Generate => "generate",
        }
    }
}

impl Display for AuditAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ContractError::UnknownAuditAction(s.to_owned()))
    }
}

/// Immutable record of one auditable mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLog {
    id: String,
    table_name: String,
    record_id: String,
    action: AuditAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    old_values: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    new_values: Option<Map<String, Value>>,
    changed_by: String,
    changed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_agent: Option<String>,
}

impl AuditLog {
    /// Start a record for `action` on `table_name`/`record_id` performed by `changed_by`
    pub fn builder(
        table_name: impl Into<String>,
        record_id: impl Into<String>,
        action: AuditAction,
        changed_by: impl Into<String>,
    ) -> AuditLogBuilder {
        AuditLogBuilder {
            table_name: table_name.into(),
            record_id: record_id.into(),
            action,
            changed_by: changed_by.into(),
            old_values: None,
            new_values: None,
            ip_address: None,
            user_agent: None,
        }
    }

    /// Unique identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Table of the mutated resource
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Identifier of the mutated resource
    #[must_use]
    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Recorded action
    #[must_use]
    pub const fn action(&self) -> AuditAction {
        self.action
    }

    /// State before the mutation
    #[must_use]
    pub const fn old_values(&self) -> Option<&Map<String, Value>> {
        self.old_values.as_ref()
    }

    /// State after the mutation
    #[must_use]
    pub const fn new_values(&self) -> Option<&Map<String, Value>> {
        self.new_values.as_ref()
    }

    /// User that performed the action
    #[must_use]
    pub fn changed_by(&self) -> &str {
        &self.changed_by
    }

    /// When the action happened
    #[must_use]
    pub const fn changed_at(&self) -> DateTime<Utc> {
        self.changed_at
    }

    /// Client address, when known
    #[must_use]
    pub fn ip_address(&self) -> Option<&str> {
        self.ip_address.as_deref()
    }

    /// Client user agent, when known
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

/// Assembles an [`AuditLog`]; consumed by [`AuditLogBuilder::build`]
#[derive(Debug, Clone)]
pub struct AuditLogBuilder {
    table_name: String,
    record_id: String,
    action: AuditAction,
    changed_by: String,
    old_values: Option<Map<String, Value>>,
    new_values: Option<Map<String, Value>>,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

impl AuditLogBuilder {
    /// Capture the state before the mutation
    #[must_use]
    pub fn old_values(mut self, values: Map<String, Value>) -> Self {
        self.old_values = Some(values);
        self
    }

    /// Capture the state after the mutation
    #[must_use]
    pub fn new_values(mut self, values: Map<String, Value>) -> Self {
        self.new_values = Some(values);
        self
    }

    /// Record the client address
    #[must_use]
    pub fn ip_address(mut self, ip: impl Into<String>) -> Self {
        self.ip_address = Some(ip.into());
        self
    }

    /// Record the client user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Stamp an id and the current time
    #[must_use]
    pub fn build(self) -> AuditLog {
        AuditLog {
            id: Uuid::new_v4().to_string(),
            table_name: self.table_name,
            record_id: self.record_id,
            action: self.action,
            old_values: self.old_values,
            new_values: self.new_values,
            changed_by: self.changed_by,
            changed_at: Utc::now(),
            ip_address: self.ip_address,
            user_agent: self.user_agent,
        }
    }
}

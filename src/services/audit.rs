// ABOUTME: Append-only audit trail capability for auditable mutations
// ABOUTME: In-memory implementation that only supports appending and reading snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Proposal Generator Contributors

use async_trait::async_trait;
use proposal_core::{AppResult, AuditLog};
use tokio::sync::RwLock;

/// Destination for audit records; entries are never updated or removed
#[async_trait]
pub trait AuditRecorder: Send + Sync {
    /// Append one record
    async fn record(&self, entry: AuditLog) -> AppResult<()>;
}

/// Audit trail kept in process memory
///
/// Entries accumulate for the life of the process with no cap or eviction,
/// so this backs the mock server and tests only. A long-running deployment
/// needs a persistent [`AuditRecorder`].
#[derive(Debug, Default)]
pub struct InMemoryAuditTrail {
    entries: RwLock<Vec<AuditLog>>,
}

impl InMemoryAuditTrail {
    /// Create an empty trail
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records in insertion order
    pub async fn entries(&self) -> Vec<AuditLog> {
        self.entries.read().await.clone()
    }

    /// Number of records
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether nothing has been recorded
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl AuditRecorder for InMemoryAuditTrail {
    async fn record(&self, entry: AuditLog) -> AppResult<()> {
        tracing::info!(
            audit.id = %entry.id(),
            audit.action = %entry.action(),
            audit.table = %entry.table_name(),
            audit.record = %entry.record_id(),
            audit.changed_by = %entry.changed_by(),
            "Audit entry recorded"
        );
        self.entries.write().await.push(entry);
        Ok(())
    }
}

//! Audit log
//!
//! Append-only trail of privileged actions. Writes are best-effort: an
//! unresolved caller produces no entry and no error, consistent with the
//! fail-soft read philosophy. Entries are immutable once written: no update
//! or delete operation exists.

use crate::identity::{RequestContext, UserDirectory};
use crate::rbac::catalog::Permission;
use crate::rbac::evaluator;
use crate::rbac::types::AuditLogEntry;
use crate::storage::{RecordId, StorageLayer};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

/// Append-only audit trail over the shared storage layer
#[derive(Debug, Clone)]
pub struct AuditLog {
    storage: Arc<StorageLayer>,
    directory: Arc<UserDirectory>,
}

impl AuditLog {
    /// Create an audit log over the shared storage layer
    pub fn new(storage: Arc<StorageLayer>, directory: Arc<UserDirectory>) -> Self {
        Self { storage, directory }
    }

    /// Record a privileged action.
    ///
    /// Returns the entry id, or `None` when the caller does not resolve
    /// (silently skipped, no error). IP address and user agent are captured
    /// from the request context.
    pub async fn record(
        &self,
        ctx: &RequestContext,
        action: &str,
        resource: &str,
        resource_id: Option<String>,
        details: Option<String>,
    ) -> Option<RecordId> {
        let user_id = self.directory.resolve(ctx)?;

        let entry = AuditLogEntry {
            id: RecordId::new(),
            user_id,
            action: action.to_string(),
            resource: resource.to_string(),
            resource_id,
            details,
            ip_address: ctx.ip_address.clone(),
            user_agent: ctx.user_agent.clone(),
            recorded_at: Utc::now(),
        };

        match self.storage.audit_logs.insert(entry) {
            Ok(id) => {
                debug!(user_id = %user_id, action, resource, "Audit entry recorded");
                Some(id)
            }
            Err(e) => {
                // A colliding fresh id should not happen; drop the entry
                // rather than failing the gated operation.
                warn!(error = %e, "Failed to record audit entry");
                None
            }
        }
    }

    /// Most recent entries, newest first, gated by `view_audit_logs`.
    ///
    /// Fail-soft: unauthenticated or unauthorized callers get an empty list.
    pub async fn recent(&self, ctx: &RequestContext, limit: usize) -> Vec<AuditLogEntry> {
        let Some(user_id) = self.directory.resolve(ctx) else {
            return Vec::new();
        };
        let profile = self
            .storage
            .profiles
            .find_unique(|p| p.user_id == user_id);
        if !evaluator::has_permission(profile.as_ref(), Permission::ViewAuditLogs) {
            return Vec::new();
        }

        let mut entries = self.storage.audit_logs.all();
        entries.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        entries.truncate(limit);
        entries
    }
}

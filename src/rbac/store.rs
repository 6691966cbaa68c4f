//! Role permission store
//!
//! Persisted mirror of the permission catalog, one record per role, kept for
//! admin-facing introspection and audit.

use crate::rbac::catalog::{permissions_for_role, role_description, Role};
use crate::rbac::types::{InitializeOutcome, RolePermissionRecord};
use crate::storage::{RecordId, StorageLayer};
use std::sync::Arc;
use tracing::info;

/// Queryable mirror of the role→permission catalog
#[derive(Debug, Clone)]
pub struct RolePermissionStore {
    storage: Arc<StorageLayer>,
}

impl RolePermissionStore {
    /// Create a store over the shared storage layer
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self { storage }
    }

    /// Rebuild the mirror from the current catalog.
    ///
    /// Deletes every existing record and reinserts one per role under a
    /// single collection write lock, so concurrent readers observe either
    /// the previous or the fresh state, never a partial mix. Idempotent;
    /// safe to call repeatedly. Not crash-atomic, as there is no durability
    /// layer underneath.
    ///
    /// Matches the reference behavior in applying no permission gate; a
    /// production deployment should wrap this behind `manage_roles`.
    pub async fn reinitialize(&self) -> InitializeOutcome {
        let records: Vec<RolePermissionRecord> = Role::ALL
            .iter()
            .map(|&role| RolePermissionRecord {
                id: RecordId::new(),
                role,
                permissions: permissions_for_role(role).to_vec(),
                description: role_description(role).to_string(),
            })
            .collect();

        let count = records.len();
        self.storage.role_permissions.replace_all(records);

        info!(roles = count, "Role permissions initialized");
        InitializeOutcome {
            success: true,
            message: "Role permissions initialized".to_string(),
        }
    }

    /// All mirror records, order unspecified. Open read, no gate.
    pub async fn list(&self) -> Vec<RolePermissionRecord> {
        self.storage.role_permissions.all()
    }
}

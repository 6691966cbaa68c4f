//! RBAC record types

use crate::identity::{UserAccount, UserId};
use crate::rbac::catalog::{Permission, Role};
use crate::storage::{Document, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user authorization record.
///
/// `permissions` is a snapshot materialized from the catalog at the moment
/// the role was last assigned: a cache, not a live join. A catalog change
/// does not retroactively update existing profiles; only a role change or
/// [`crate::rbac::profiles::ProfileService::resync_permissions`] recomputes
/// them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Record identifier
    pub id: RecordId,
    /// Owning user (unique: at most one profile per user)
    pub user_id: UserId,
    /// Assigned role
    pub role: Role,
    /// Materialized permission snapshot for `role`
    pub permissions: Vec<Permission>,
    /// Department
    pub department: String,
    /// Optional employee identifier
    pub employee_id: Option<String>,
    /// Deactivated profiles fail every permission check; there is no hard
    /// delete, this flag is the soft-delete mechanism
    pub is_active: bool,
    /// Last login, milliseconds since the Unix epoch
    pub last_login: Option<i64>,
    /// Zones this user may see; ignored entirely when the profile holds
    /// `access_all_zones`
    pub assigned_zones: Vec<String>,
}

impl Document for UserProfile {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Persisted projection of a role, kept for admin introspection and audit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolePermissionRecord {
    /// Record identifier
    pub id: RecordId,
    /// The role
    pub role: Role,
    /// The role's permission list at the last reinitialize
    pub permissions: Vec<Permission>,
    /// Human-readable description
    pub description: String,
}

impl Document for RolePermissionRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Append-only record of a privileged action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Record identifier
    pub id: RecordId,
    /// Who acted
    pub user_id: UserId,
    /// What they did (e.g. "create_profile")
    pub action: String,
    /// Which collection/resource was touched
    pub resource: String,
    /// Specific record, when applicable
    pub resource_id: Option<String>,
    /// Free-form detail
    pub details: Option<String>,
    /// Client IP captured from the request context
    pub ip_address: Option<String>,
    /// Client user agent captured from the request context
    pub user_agent: Option<String>,
    /// When the entry was written
    pub recorded_at: DateTime<Utc>,
}

impl Document for AuditLogEntry {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Partial profile update: `None` means "leave untouched", never "clear".
///
/// Permissions are deliberately absent; a role change is the only path that
/// rewrites the materialized permission list.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    /// New role; triggers unconditional permission recomputation
    pub role: Option<Role>,
    /// New department
    pub department: Option<String>,
    /// New employee id
    pub employee_id: Option<String>,
    /// New zone assignment
    pub assigned_zones: Option<Vec<String>>,
    /// Activate/deactivate the profile
    pub is_active: Option<bool>,
}

impl ProfileUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.role.is_none()
            && self.department.is_none()
            && self.employee_id.is_none()
            && self.assigned_zones.is_none()
            && self.is_active.is_none()
    }
}

/// A user account joined with its authorization profile, if one exists.
///
/// A `None` profile is the signal the UI layer uses to trigger the
/// self-service bootstrap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithProfile {
    /// The account
    pub user: UserAccount,
    /// The profile, absent when none has been created yet
    pub profile: Option<UserProfile>,
}

/// Outcome of a role-permission mirror reinitialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeOutcome {
    /// Whether the mirror was rebuilt
    pub success: bool,
    /// Operator-facing message
    pub message: String,
}

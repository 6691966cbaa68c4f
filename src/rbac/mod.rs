//! Role-Based Access Control engine
//!
//! The authorization core: permission taxonomy and role catalog, the
//! persisted role→permission mirror, profile lifecycle with materialized
//! permission snapshots, the pure permission evaluator, and the audit log.

pub mod audit;
pub mod catalog;
pub mod evaluator;
pub mod profiles;
pub mod store;
pub mod types;

pub use audit::AuditLog;
pub use catalog::{permissions_for_role, role_description, Permission, Role};
pub use profiles::ProfileService;
pub use store::RolePermissionStore;
pub use types::{
    AuditLogEntry, InitializeOutcome, ProfileUpdate, RolePermissionRecord, UserProfile,
    UserWithProfile,
};

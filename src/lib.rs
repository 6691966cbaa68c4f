//! # SentryOps
//!
//! Role-based access control core for a physical-security operations
//! platform: guard dog rosters, bodyguard shifts, CCTV inventory, physical
//! and network security events, and the SIEM views over them.
//!
//! ## Features
//!
//! - **Closed permission taxonomy**: every grantable capability is a variant
//!   of [`Permission`]; roles map to fixed permission sets
//! - **Materialized snapshots**: profiles carry their permission list, so a
//!   permission check never joins against the role catalog
//! - **Zone scoping**: entity reads are filtered to the caller's assigned
//!   zones unless the profile grants `access_all_zones`
//! - **Fail-soft reads, fail-loud writes**: queries degrade to empty results
//!   for under-privileged callers, mutations return errors
//! - **Audit trail**: every mutation leaves an entry with caller identity and
//!   request metadata
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sentryops::{Config, RequestContext, SecOps};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ops = SecOps::new(Config::from_env()?);
//!
//!     let account = ops.directory().register("Dana", "dana@example.com");
//!     let token = ops.directory().issue_session(account.id).unwrap();
//!     let ctx = RequestContext::with_token(token);
//!
//!     // First profile ever created becomes the admin
//!     let profile = ops.create_initial_profile(&ctx).await?;
//!     println!("{} -> {}", account.name, profile.role);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod identity;
pub mod rbac;
pub mod storage;
pub mod utils;

pub use config::Config;
pub use identity::{RequestContext, UserAccount, UserDirectory, UserId};
pub use rbac::{
    permissions_for_role, role_description, AuditLogEntry, InitializeOutcome, Permission,
    ProfileUpdate, Role, RolePermissionRecord, UserProfile, UserWithProfile,
};
pub use storage::RecordId;
pub use utils::error::{OpsError, Result};

use crate::core::security::SecurityService;
use crate::core::siem::SiemService;
use rbac::{AuditLog, ProfileService, RolePermissionStore};
use std::sync::Arc;
use storage::StorageLayer;
use tracing::info;

/// The assembled security-operations core.
///
/// Owns the storage layer and user directory and wires the RBAC services on
/// top of them. Entity and SIEM operations hang off [`Self::security`] and
/// [`Self::siem`]; the profile and catalog operations are delegated here
/// directly.
pub struct SecOps {
    storage: Arc<StorageLayer>,
    directory: Arc<UserDirectory>,
    profiles: Arc<ProfileService>,
    roles: RolePermissionStore,
    audit: AuditLog,
    security: SecurityService,
    siem: SiemService,
}

impl SecOps {
    /// Assemble the core from configuration
    pub fn new(config: Config) -> Self {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            git = utils::GIT_HASH,
            "Assembling security operations core"
        );

        let storage = Arc::new(StorageLayer::new());
        let directory = Arc::new(UserDirectory::new(&config.auth));
        let audit = AuditLog::new(storage.clone(), directory.clone());
        let profiles = Arc::new(ProfileService::new(
            storage.clone(),
            directory.clone(),
            audit.clone(),
            config.auth.bootstrap.clone(),
        ));
        let roles = RolePermissionStore::new(storage.clone());
        let security = SecurityService::new(
            storage.clone(),
            directory.clone(),
            profiles.clone(),
            audit.clone(),
        );
        let siem = SiemService::new(
            storage.clone(),
            directory.clone(),
            profiles.clone(),
            audit.clone(),
        );

        Self {
            storage,
            directory,
            profiles,
            roles,
            audit,
            security,
            siem,
        }
    }

    /// Account registry and session issuance
    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Guard dog, bodyguard, camera, and security event operations
    pub fn security(&self) -> &SecurityService {
        &self.security
    }

    /// Network events, SIEM stats, and correlation rules
    pub fn siem(&self) -> &SiemService {
        &self.siem
    }

    /// True iff the caller resolves to an active profile holding `permission`
    pub async fn check_permission(&self, ctx: &RequestContext, permission: Permission) -> bool {
        self.profiles.check_permission(ctx, permission).await
    }

    /// The caller's materialized permissions; empty for unresolved callers
    /// and missing profiles. Deactivation does not clear the snapshot, it
    /// only makes [`Self::check_permission`] answer false.
    pub async fn user_permissions(&self, ctx: &RequestContext) -> Vec<Permission> {
        self.profiles.user_permissions(ctx).await
    }

    /// The persisted role→permission records
    pub async fn role_permissions(&self) -> Vec<RolePermissionRecord> {
        self.roles.list().await
    }

    /// Rebuild the persisted role→permission mirror from the catalog
    pub async fn initialize_role_permissions(&self) -> InitializeOutcome {
        self.roles.reinitialize().await
    }

    /// Bootstrap the caller's own profile: admin when no admin profile exists
    /// yet, viewer otherwise
    pub async fn create_initial_profile(&self, ctx: &RequestContext) -> Result<UserProfile> {
        self.profiles.create_initial_profile(ctx).await
    }

    /// Create a profile for `target`. Requires `manage_users`.
    pub async fn create_user_profile(
        &self,
        ctx: &RequestContext,
        target: UserId,
        role: Role,
        department: String,
        employee_id: Option<String>,
        assigned_zones: Vec<String>,
    ) -> Result<RecordId> {
        self.profiles
            .create_profile(ctx, target, role, department, employee_id, assigned_zones)
            .await
    }

    /// Patch a profile. Requires `manage_users`.
    pub async fn update_user_profile(
        &self,
        ctx: &RequestContext,
        profile_id: RecordId,
        update: ProfileUpdate,
    ) -> Result<UserProfile> {
        self.profiles.update_profile(ctx, profile_id, update).await
    }

    /// Stamp the caller's own last-login time; `None` if the caller does not
    /// resolve to a profile
    pub async fn update_last_login(&self, ctx: &RequestContext) -> Option<UserProfile> {
        self.profiles.update_last_login(ctx).await
    }

    /// The caller's account joined with their profile, if any
    pub async fn current_user_profile(&self, ctx: &RequestContext) -> Option<UserWithProfile> {
        self.profiles.current_profile(ctx).await
    }

    /// Every account joined with its profile. Requires an authenticated
    /// caller; a caller without `manage_users` gets an empty list.
    pub async fn all_users(&self, ctx: &RequestContext) -> Result<Vec<UserWithProfile>> {
        self.profiles.list_all_with_profiles(ctx).await
    }

    /// Accounts with no profile yet. Same gating as [`Self::all_users`].
    pub async fn users_without_profile(&self, ctx: &RequestContext) -> Result<Vec<UserAccount>> {
        self.profiles.users_without_profile(ctx).await
    }

    /// Recompute every profile's permissions from the catalog. Requires
    /// `manage_users`. Returns the number of profiles rewritten.
    pub async fn resync_permissions(&self, ctx: &RequestContext) -> Result<usize> {
        self.profiles.resync_permissions(ctx).await
    }

    /// Append an audit entry for the caller; dropped when the caller does
    /// not resolve
    pub async fn log_audit_event(
        &self,
        ctx: &RequestContext,
        action: &str,
        resource: &str,
        resource_id: Option<String>,
        details: Option<String>,
    ) -> Option<RecordId> {
        self.audit.record(ctx, action, resource, resource_id, details).await
    }

    /// Newest audit entries first. Requires `view_audit_logs`; empty
    /// otherwise.
    pub async fn recent_audit_logs(
        &self,
        ctx: &RequestContext,
        limit: usize,
    ) -> Vec<AuditLogEntry> {
        self.audit.recent(ctx, limit).await
    }

    /// Replace the operational collections with demo data
    pub fn seed_demo_data(&self) -> InitializeOutcome {
        crate::core::seed::seed_security_data(&self.storage)
    }
}

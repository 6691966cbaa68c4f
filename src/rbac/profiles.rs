//! User profile store
//!
//! Profile lifecycle and the caller-resolving permission checks. Write paths
//! are fail-loud (`Unauthenticated` / `PermissionDenied` / `AlreadyExists`),
//! read paths fail-soft; see the per-operation docs. UI layers depend on
//! which behavior they get.

use crate::config::BootstrapConfig;
use crate::identity::{RequestContext, UserDirectory, UserId};
use crate::rbac::audit::AuditLog;
use crate::rbac::catalog::{permissions_for_role, Permission, Role};
use crate::rbac::evaluator;
use crate::rbac::types::{ProfileUpdate, UserProfile, UserWithProfile};
use crate::storage::{RecordId, StorageLayer};
use crate::utils::current_timestamp_millis;
use crate::utils::error::{OpsError, Result};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

/// Profile CRUD with permission enforcement and role-to-permission
/// materialization
#[derive(Debug, Clone)]
pub struct ProfileService {
    storage: Arc<StorageLayer>,
    directory: Arc<UserDirectory>,
    audit: AuditLog,
    bootstrap: BootstrapConfig,
}

impl ProfileService {
    /// Create the service over the shared collaborators
    pub fn new(
        storage: Arc<StorageLayer>,
        directory: Arc<UserDirectory>,
        audit: AuditLog,
        bootstrap: BootstrapConfig,
    ) -> Self {
        Self {
            storage,
            directory,
            audit,
            bootstrap,
        }
    }

    fn profile_of(&self, user_id: UserId) -> Option<UserProfile> {
        self.storage.profiles.find_unique(|p| p.user_id == user_id)
    }

    /// The caller's profile, if the caller resolves and has one
    pub fn caller_profile(&self, ctx: &RequestContext) -> Option<UserProfile> {
        let user_id = self.directory.resolve(ctx)?;
        self.profile_of(user_id)
    }

    /// Fail-closed permission query for read paths.
    ///
    /// Never errors: unauthenticated, missing profile, and inactive profile
    /// all answer `false`.
    pub async fn check_permission(&self, ctx: &RequestContext, permission: Permission) -> bool {
        evaluator::has_permission(self.caller_profile(ctx).as_ref(), permission)
    }

    /// The caller's materialized permission list; empty when the caller does
    /// not resolve or has no profile
    pub async fn user_permissions(&self, ctx: &RequestContext) -> Vec<Permission> {
        self.caller_profile(ctx)
            .map(|p| p.permissions)
            .unwrap_or_default()
    }

    /// Self-service bootstrap, idempotent per caller.
    ///
    /// The first caller while no admin profile exists becomes `admin`; every
    /// later first-time caller becomes `viewer`. A caller who already has a
    /// profile gets it back unchanged. The existence check, the admin count,
    /// and the insert run under one collection lock, so two concurrent
    /// first-time callers cannot both observe "zero admins".
    pub async fn create_initial_profile(&self, ctx: &RequestContext) -> Result<UserProfile> {
        let user_id = self.directory.resolve(ctx).ok_or(OpsError::Unauthenticated)?;
        let bootstrap = self.bootstrap.clone();

        let (profile, created) = self.storage.profiles.with_exclusive(|records| {
            if let Some(existing) = records.values().find(|p| p.user_id == user_id) {
                return (existing.clone(), false);
            }

            let admin_count = records.values().filter(|p| p.role == Role::Admin).count();
            let role = if admin_count == 0 {
                Role::Admin
            } else {
                Role::Viewer
            };

            let profile = UserProfile {
                id: RecordId::new(),
                user_id,
                role,
                permissions: permissions_for_role(role).to_vec(),
                department: bootstrap.department,
                employee_id: None,
                is_active: true,
                last_login: None,
                assigned_zones: bootstrap.assigned_zones,
            };
            records.insert(profile.id, profile.clone());
            (profile, true)
        });

        if created {
            info!(user_id = %user_id, role = %profile.role, "Bootstrap profile created");
        }
        Ok(profile)
    }

    /// Create a profile for another user. Requires `manage_users`.
    ///
    /// Fails `Unauthenticated` when the caller does not resolve,
    /// `PermissionDenied` without `manage_users`, and `AlreadyExists` when
    /// the target already owns a profile. Permissions are materialized from
    /// the catalog for `role`; the profile starts active.
    pub async fn create_profile(
        &self,
        ctx: &RequestContext,
        target: UserId,
        role: Role,
        department: String,
        employee_id: Option<String>,
        assigned_zones: Vec<String>,
    ) -> Result<RecordId> {
        self.require_manage_users(ctx)?;

        let profile = UserProfile {
            id: RecordId::new(),
            user_id: target,
            role,
            permissions: permissions_for_role(role).to_vec(),
            department,
            employee_id,
            is_active: true,
            last_login: None,
            assigned_zones,
        };

        let id = self
            .storage
            .profiles
            .insert_unique_by(profile, |p| p.user_id == target)
            .map_err(|e| match e {
                OpsError::AlreadyExists(_) => {
                    OpsError::AlreadyExists("User profile already exists".to_string())
                }
                other => other,
            })?;

        info!(target = %target, role = %role, "User profile created");
        self.audit
            .record(
                ctx,
                "create_profile",
                "userProfiles",
                Some(id.to_string()),
                Some(format!("role={}", role)),
            )
            .await;
        Ok(id)
    }

    /// Patch a profile. Requires `manage_users`.
    ///
    /// Only fields present in the update change; a role change
    /// unconditionally recomputes the materialized permissions for the new
    /// role; there is no path that sets permissions independently.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        profile_id: RecordId,
        update: ProfileUpdate,
    ) -> Result<UserProfile> {
        self.require_manage_users(ctx)?;

        let role_changed = update.role;
        let updated = self.storage.profiles.patch(profile_id, |profile| {
            if let Some(role) = update.role {
                profile.role = role;
                profile.permissions = permissions_for_role(role).to_vec();
            }
            if let Some(department) = update.department {
                profile.department = department;
            }
            if let Some(employee_id) = update.employee_id {
                profile.employee_id = Some(employee_id);
            }
            if let Some(zones) = update.assigned_zones {
                profile.assigned_zones = zones;
            }
            if let Some(active) = update.is_active {
                profile.is_active = active;
            }
        })?;

        if let Some(role) = role_changed {
            info!(profile_id = %profile_id, role = %role, "Profile role changed, permissions rematerialized");
        }
        self.audit
            .record(
                ctx,
                "update_profile",
                "userProfiles",
                Some(profile_id.to_string()),
                None,
            )
            .await;
        Ok(updated)
    }

    /// Stamp the caller's own last-login time.
    ///
    /// Fail-soft: no permission gate beyond "the caller resolves to an
    /// existing profile". Returns `None` (never an error) for unresolved
    /// callers or callers without a profile.
    pub async fn update_last_login(&self, ctx: &RequestContext) -> Option<UserProfile> {
        let user_id = self.directory.resolve(ctx)?;
        let profile = self.profile_of(user_id)?;
        self.storage
            .profiles
            .patch(profile.id, |p| p.last_login = Some(current_timestamp_millis()))
            .ok()
    }

    /// The caller's account joined with their profile (which may not exist
    /// yet); `None` when the caller does not resolve
    pub async fn current_profile(&self, ctx: &RequestContext) -> Option<UserWithProfile> {
        let user_id = self.directory.resolve(ctx)?;
        let user = self.directory.get(user_id)?;
        Some(UserWithProfile {
            profile: self.profile_of(user_id),
            user,
        })
    }

    /// Every account joined with its optional profile.
    ///
    /// `Unauthenticated` when the caller does not resolve; an authenticated
    /// caller without `manage_users` gets an empty list, not an error; the
    /// asymmetry is intentional and load-bearing for the UI layer.
    pub async fn list_all_with_profiles(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<UserWithProfile>> {
        let user_id = self.directory.resolve(ctx).ok_or(OpsError::Unauthenticated)?;
        let caller = self.profile_of(user_id);
        if !evaluator::has_permission(caller.as_ref(), Permission::ManageUsers) {
            return Ok(Vec::new());
        }

        Ok(self
            .directory
            .all_accounts()
            .into_iter()
            .map(|user| UserWithProfile {
                profile: self.profile_of(user.id),
                user,
            })
            .collect())
    }

    /// Accounts that have no profile yet. Same gating as
    /// [`Self::list_all_with_profiles`].
    pub async fn users_without_profile(
        &self,
        ctx: &RequestContext,
    ) -> Result<Vec<crate::identity::UserAccount>> {
        let user_id = self.directory.resolve(ctx).ok_or(OpsError::Unauthenticated)?;
        let caller = self.profile_of(user_id);
        if !evaluator::has_permission(caller.as_ref(), Permission::ManageUsers) {
            return Ok(Vec::new());
        }

        let with_profiles: HashSet<UserId> = self
            .storage
            .profiles
            .all()
            .into_iter()
            .map(|p| p.user_id)
            .collect();

        Ok(self
            .directory
            .all_accounts()
            .into_iter()
            .filter(|u| !with_profiles.contains(&u.id))
            .collect())
    }

    /// Maintenance: recompute every profile's materialized permissions from
    /// the current catalog. Requires `manage_users`.
    ///
    /// Catalog changes do not retroactively update persisted profiles; run
    /// this after a deploy when staleness is unacceptable. Returns the number
    /// of profiles rewritten.
    pub async fn resync_permissions(&self, ctx: &RequestContext) -> Result<usize> {
        self.require_manage_users(ctx)?;

        let count = self.storage.profiles.with_exclusive(|records| {
            for profile in records.values_mut() {
                profile.permissions = permissions_for_role(profile.role).to_vec();
            }
            records.len()
        });

        info!(profiles = count, "Profile permissions resynced to catalog");
        self.audit
            .record(
                ctx,
                "resync_permissions",
                "userProfiles",
                None,
                Some(format!("{} profiles", count)),
            )
            .await;
        Ok(count)
    }

    fn require_manage_users(&self, ctx: &RequestContext) -> Result<UserId> {
        let user_id = self.directory.resolve(ctx).ok_or(OpsError::Unauthenticated)?;
        let caller = self.profile_of(user_id);
        if !evaluator::has_permission(caller.as_ref(), Permission::ManageUsers) {
            return Err(OpsError::denied(Permission::ManageUsers));
        }
        Ok(user_id)
    }
}

//! Gated services over the security entities
//!
//! Every operation here goes through the RBAC engine: reads are fail-soft
//! (empty result when the caller lacks the view permission) and zone-scoped
//! through the evaluator; mutations are fail-loud and leave an audit entry.

mod cameras;
mod dogs;
mod events;
mod guards;

pub use cameras::{CameraUpdate, NewCamera};
pub use dogs::{GuardDogUpdate, NewGuardDog};
pub use events::NewSecurityEvent;
pub use guards::{BodyguardUpdate, NewBodyguard};

use crate::identity::{RequestContext, UserDirectory, UserId};
use crate::rbac::audit::AuditLog;
use crate::rbac::catalog::Permission;
use crate::rbac::evaluator;
use crate::rbac::profiles::ProfileService;
use crate::rbac::types::UserProfile;
use crate::storage::StorageLayer;
use crate::utils::error::{OpsError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// CRUD over guard dogs, bodyguards, cameras, and security events
#[derive(Debug, Clone)]
pub struct SecurityService {
    pub(super) storage: Arc<StorageLayer>,
    pub(super) directory: Arc<UserDirectory>,
    pub(super) profiles: Arc<ProfileService>,
    pub(super) audit: AuditLog,
}

impl SecurityService {
    /// Create the service over the shared collaborators
    pub fn new(
        storage: Arc<StorageLayer>,
        directory: Arc<UserDirectory>,
        profiles: Arc<ProfileService>,
        audit: AuditLog,
    ) -> Self {
        Self {
            storage,
            directory,
            profiles,
            audit,
        }
    }

    /// Fail-loud gate for mutations: `Unauthenticated` when the caller does
    /// not resolve, `PermissionDenied` without `permission`.
    pub(super) fn require(
        &self,
        ctx: &RequestContext,
        permission: Permission,
    ) -> Result<UserId> {
        let user_id = self.directory.resolve(ctx).ok_or(OpsError::Unauthenticated)?;
        let profile = self.profiles.caller_profile(ctx);
        if !evaluator::has_permission(profile.as_ref(), permission) {
            return Err(OpsError::denied(permission));
        }
        Ok(user_id)
    }

    /// Fail-soft gate for reads: `None` when the caller lacks `permission`.
    /// The returned profile drives zone filtering.
    pub(super) fn viewer(
        &self,
        ctx: &RequestContext,
        permission: Permission,
    ) -> Option<UserProfile> {
        let profile = self.profiles.caller_profile(ctx)?;
        if evaluator::has_permission(Some(&profile), permission) {
            Some(profile)
        } else {
            None
        }
    }

    /// Zone-filter a snapshot down to what `profile` may see
    pub(super) fn visible_in_zones<T>(
        profile: &UserProfile,
        items: Vec<T>,
        zone_of: impl Fn(&T) -> &str,
    ) -> Vec<T> {
        items
            .into_iter()
            .filter(|item| evaluator::can_access_zone(Some(profile), zone_of(item)))
            .collect()
    }

    /// Headline counts for the dashboard, gated by `view_dashboard`.
    ///
    /// Fail-soft: `None` when the caller may not see the dashboard.
    pub async fn dashboard_stats(&self, ctx: &RequestContext) -> Option<DashboardStats> {
        self.viewer(ctx, Permission::ViewDashboard)?;

        use crate::core::models::{CameraStatus, DogStatus, GuardStatus};
        Some(DashboardStats {
            active_dogs: self
                .storage
                .guard_dogs
                .count(|d| d.status == DogStatus::Active),
            total_dogs: self.storage.guard_dogs.len(),
            guards_on_duty: self
                .storage
                .bodyguards
                .count(|g| g.status == GuardStatus::OnDuty),
            total_guards: self.storage.bodyguards.len(),
            cameras_online: self
                .storage
                .cameras
                .count(|c| c.status == CameraStatus::Online),
            total_cameras: self.storage.cameras.len(),
            unresolved_events: self.storage.security_events.count(|e| !e.is_resolved),
        })
    }
}

/// Headline counts shown on the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Dogs currently active
    pub active_dogs: usize,
    /// Dogs on the roster
    pub total_dogs: usize,
    /// Guards on duty
    pub guards_on_duty: usize,
    /// Guards on the roster
    pub total_guards: usize,
    /// Cameras online
    pub cameras_online: usize,
    /// Cameras in the inventory
    pub total_cameras: usize,
    /// Security events awaiting resolution
    pub unresolved_events: usize,
}

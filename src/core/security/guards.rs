//! Bodyguard operations

use super::SecurityService;
use crate::core::models::{Bodyguard, GeoPoint, GuardStatus};
use crate::identity::RequestContext;
use crate::rbac::catalog::Permission;
use crate::storage::RecordId;
use crate::utils::error::Result;
use tracing::info;

/// Fields for adding a bodyguard to the roster
#[derive(Debug, Clone)]
pub struct NewBodyguard {
    pub name: String,
    pub employee_id: String,
    pub assigned_zone: String,
    pub status: GuardStatus,
    pub current_activity: String,
    pub shift_start: i64,
    pub shift_end: i64,
    pub location: GeoPoint,
    pub contact: String,
    pub certifications: Vec<String>,
}

/// Partial bodyguard update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct BodyguardUpdate {
    pub name: Option<String>,
    pub employee_id: Option<String>,
    pub assigned_zone: Option<String>,
    pub status: Option<GuardStatus>,
    pub current_activity: Option<String>,
    pub shift_start: Option<i64>,
    pub shift_end: Option<i64>,
    pub location: Option<GeoPoint>,
    pub contact: Option<String>,
    pub certifications: Option<Vec<String>>,
}

impl SecurityService {
    /// Bodyguards the caller may see, zone-scoped. Requires
    /// `view_bodyguards`; fail-soft empty otherwise.
    pub async fn bodyguards(&self, ctx: &RequestContext) -> Vec<Bodyguard> {
        let Some(profile) = self.viewer(ctx, Permission::ViewBodyguards) else {
            return Vec::new();
        };
        Self::visible_in_zones(&profile, self.storage.bodyguards.all(), |g| {
            &g.assigned_zone
        })
    }

    /// On-duty bodyguards the caller may see
    pub async fn active_bodyguards(&self, ctx: &RequestContext) -> Vec<Bodyguard> {
        self.bodyguards(ctx)
            .await
            .into_iter()
            .filter(|g| g.status == GuardStatus::OnDuty)
            .collect()
    }

    /// Add a bodyguard. Requires `manage_bodyguards`.
    pub async fn add_bodyguard(
        &self,
        ctx: &RequestContext,
        new: NewBodyguard,
    ) -> Result<RecordId> {
        self.require(ctx, Permission::ManageBodyguards)?;

        let guard = Bodyguard {
            id: RecordId::new(),
            name: new.name,
            employee_id: new.employee_id,
            assigned_zone: new.assigned_zone,
            status: new.status,
            current_activity: new.current_activity,
            shift_start: new.shift_start,
            shift_end: new.shift_end,
            location: new.location,
            contact: new.contact,
            certifications: new.certifications,
        };
        let id = self.storage.bodyguards.insert(guard)?;

        info!(guard_id = %id, "Bodyguard added");
        self.audit
            .record(ctx, "add_bodyguard", "bodyguards", Some(id.to_string()), None)
            .await;
        Ok(id)
    }

    /// Patch a bodyguard record. Requires `manage_bodyguards`.
    pub async fn update_bodyguard(
        &self,
        ctx: &RequestContext,
        guard_id: RecordId,
        update: BodyguardUpdate,
    ) -> Result<Bodyguard> {
        self.require(ctx, Permission::ManageBodyguards)?;

        let updated = self.storage.bodyguards.patch(guard_id, |guard| {
            if let Some(name) = update.name {
                guard.name = name;
            }
            if let Some(employee_id) = update.employee_id {
                guard.employee_id = employee_id;
            }
            if let Some(zone) = update.assigned_zone {
                guard.assigned_zone = zone;
            }
            if let Some(status) = update.status {
                guard.status = status;
            }
            if let Some(activity) = update.current_activity {
                guard.current_activity = activity;
            }
            if let Some(start) = update.shift_start {
                guard.shift_start = start;
            }
            if let Some(end) = update.shift_end {
                guard.shift_end = end;
            }
            if let Some(location) = update.location {
                guard.location = location;
            }
            if let Some(contact) = update.contact {
                guard.contact = contact;
            }
            if let Some(certs) = update.certifications {
                guard.certifications = certs;
            }
        })?;

        self.audit
            .record(
                ctx,
                "update_bodyguard",
                "bodyguards",
                Some(guard_id.to_string()),
                None,
            )
            .await;
        Ok(updated)
    }

    /// Field status update. Requires `update_guard_status` (narrower than
    /// full management).
    pub async fn update_guard_status(
        &self,
        ctx: &RequestContext,
        guard_id: RecordId,
        status: GuardStatus,
        current_activity: Option<String>,
    ) -> Result<Bodyguard> {
        self.require(ctx, Permission::UpdateGuardStatus)?;

        let updated = self.storage.bodyguards.patch(guard_id, |guard| {
            guard.status = status;
            if let Some(activity) = current_activity {
                guard.current_activity = activity;
            }
        })?;

        self.audit
            .record(
                ctx,
                "update_guard_status",
                "bodyguards",
                Some(guard_id.to_string()),
                Some(format!("status={:?}", status)),
            )
            .await;
        Ok(updated)
    }

    /// Remove a bodyguard. Requires `manage_bodyguards`.
    pub async fn delete_bodyguard(&self, ctx: &RequestContext, guard_id: RecordId) -> Result<()> {
        self.require(ctx, Permission::ManageBodyguards)?;
        self.storage.bodyguards.delete(guard_id)?;

        info!(guard_id = %guard_id, "Bodyguard removed");
        self.audit
            .record(
                ctx,
                "delete_bodyguard",
                "bodyguards",
                Some(guard_id.to_string()),
                None,
            )
            .await;
        Ok(())
    }
}

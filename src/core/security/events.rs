//! Security event operations

use super::SecurityService;
use crate::core::models::{
    EventMetadata, EventSource, SecurityEvent, SecurityEventType, Severity, ZonedLocation,
};
use crate::identity::RequestContext;
use crate::rbac::catalog::Permission;
use crate::storage::RecordId;
use crate::utils::current_timestamp_millis;
use crate::utils::error::Result;
use tracing::info;

/// Fields for logging a new security event
#[derive(Debug, Clone)]
pub struct NewSecurityEvent {
    pub event_type: SecurityEventType,
    pub severity: Severity,
    pub description: String,
    pub location: ZonedLocation,
    pub source_id: String,
    pub source_type: EventSource,
    pub metadata: Option<EventMetadata>,
}

impl SecurityService {
    /// Events the caller may see, newest first, zone-scoped. Requires
    /// `view_all_events`; fail-soft empty otherwise. `resolved` filters by
    /// resolution state when given.
    pub async fn security_events(
        &self,
        ctx: &RequestContext,
        resolved: Option<bool>,
    ) -> Vec<SecurityEvent> {
        let Some(profile) = self.viewer(ctx, Permission::ViewAllEvents) else {
            return Vec::new();
        };

        let events = match resolved {
            Some(wanted) => self
                .storage
                .security_events
                .find(|e| e.is_resolved == wanted),
            None => self.storage.security_events.all(),
        };
        let mut visible =
            Self::visible_in_zones(&profile, events, |e| &e.location.zone);
        visible.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        visible
    }

    /// Events in one zone, newest first; empty unless the caller may see
    /// both the events and the zone
    pub async fn events_by_zone(&self, ctx: &RequestContext, zone: &str) -> Vec<SecurityEvent> {
        self.security_events(ctx, None)
            .await
            .into_iter()
            .filter(|e| e.location.zone == zone)
            .collect()
    }

    /// Log a new event. Requires `create_events`.
    pub async fn log_security_event(
        &self,
        ctx: &RequestContext,
        new: NewSecurityEvent,
    ) -> Result<RecordId> {
        self.require(ctx, Permission::CreateEvents)?;

        let event = SecurityEvent {
            id: RecordId::new(),
            is_resolved: false,
            resolved_by: None,
            resolved_at: None,
            recorded_at: current_timestamp_millis(),
            event_type: new.event_type,
            severity: new.severity,
            description: new.description,
            location: new.location,
            source_id: new.source_id,
            source_type: new.source_type,
            metadata: new.metadata,
        };
        let id = self.storage.security_events.insert(event)?;

        info!(event = %id, "Security event logged");
        self.audit
            .record(
                ctx,
                "log_security_event",
                "securityEvents",
                Some(id.to_string()),
                None,
            )
            .await;
        Ok(id)
    }

    /// Mark an event resolved, stamping the resolving caller and time.
    /// Requires `resolve_events`.
    pub async fn resolve_security_event(
        &self,
        ctx: &RequestContext,
        event_id: RecordId,
    ) -> Result<SecurityEvent> {
        let user_id = self.require(ctx, Permission::ResolveEvents)?;

        let updated = self.storage.security_events.patch(event_id, |event| {
            event.is_resolved = true;
            event.resolved_by = Some(user_id.to_string());
            event.resolved_at = Some(current_timestamp_millis());
        })?;

        info!(event = %event_id, "Security event resolved");
        self.audit
            .record(
                ctx,
                "resolve_security_event",
                "securityEvents",
                Some(event_id.to_string()),
                None,
            )
            .await;
        Ok(updated)
    }

    /// Remove an event. Requires `manage_security_events`.
    pub async fn delete_security_event(
        &self,
        ctx: &RequestContext,
        event_id: RecordId,
    ) -> Result<()> {
        self.require(ctx, Permission::ManageSecurityEvents)?;
        self.storage.security_events.delete(event_id)?;

        self.audit
            .record(
                ctx,
                "delete_security_event",
                "securityEvents",
                Some(event_id.to_string()),
                None,
            )
            .await;
        Ok(())
    }
}

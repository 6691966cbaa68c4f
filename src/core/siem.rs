//! SIEM service
//!
//! Network-event recording, filtered queries, and the aggregate counts the
//! SIEM dashboard renders. Queries follow the reference gating: an
//! unresolved caller is an error even on reads here, while a resolved caller
//! without `view_siem` gets a silent empty/`None` result.

use crate::core::models::{
    NetworkEvent, NetworkEventStatus, NetworkEventType, Severity, SiemRule, SiemRuleCondition,
};
use crate::identity::{RequestContext, UserDirectory};
use crate::rbac::audit::AuditLog;
use crate::rbac::catalog::Permission;
use crate::rbac::evaluator;
use crate::rbac::profiles::ProfileService;
use crate::storage::{RecordId, StorageLayer};
use crate::utils::current_timestamp_millis;
use crate::utils::error::{OpsError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

const DEFAULT_EVENT_LIMIT: usize = 50;
const DAY_MS: i64 = 24 * 60 * 60 * 1000;
const HOUR_MS: i64 = 60 * 60 * 1000;

/// Network-event queries and SIEM rule management
#[derive(Debug, Clone)]
pub struct SiemService {
    storage: Arc<StorageLayer>,
    directory: Arc<UserDirectory>,
    profiles: Arc<ProfileService>,
    audit: AuditLog,
}

/// Query filter for network events; unset fields do not filter
#[derive(Debug, Clone, Default)]
pub struct NetworkEventFilter {
    /// Maximum events returned (default 50)
    pub limit: Option<usize>,
    /// Only events at this severity
    pub severity: Option<Severity>,
    /// Only events of this kind
    pub event_type: Option<NetworkEventType>,
    /// Only events within the last `time_range_ms` milliseconds
    pub time_range_ms: Option<i64>,
}

/// Fields for recording a network event
#[derive(Debug, Clone)]
pub struct NewNetworkEvent {
    pub event_type: NetworkEventType,
    pub severity: Severity,
    pub source_ip: String,
    pub destination_ip: Option<String>,
    pub port: Option<u16>,
    pub protocol: Option<String>,
    pub status: NetworkEventStatus,
    pub description: String,
    pub user_id: Option<String>,
    pub location: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Fields for creating a correlation rule
#[derive(Debug, Clone)]
pub struct NewSiemRule {
    pub name: String,
    pub description: String,
    pub event_type: String,
    pub conditions: Vec<SiemRuleCondition>,
    pub severity: Severity,
    pub actions: Vec<String>,
}

/// Aggregate counts over the network-event stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiemStats {
    /// All events ever recorded
    pub total_events: usize,
    /// Events in the last 24 hours
    pub recent_events: usize,
    /// Recent events at critical severity
    pub critical_events: usize,
    /// Recent events at high severity
    pub high_events: usize,
    /// Recent events at medium severity
    pub medium_events: usize,
    /// Recent events at low severity
    pub low_events: usize,
    /// Recent events that were blocked
    pub blocked_events: usize,
    /// Recent events that were detected
    pub detected_events: usize,
    /// Recent event counts per kind
    pub events_by_type: HashMap<NetworkEventType, usize>,
    /// Busiest source IPs over the last 24 hours, descending
    pub top_source_ips: Vec<IpCount>,
    /// Hourly buckets over the last 24 hours, oldest first
    pub threat_trends: Vec<HourlyTrend>,
}

/// Event count for one source IP
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpCount {
    /// Source IP
    pub ip: String,
    /// Events from it
    pub count: usize,
}

/// One hour of threat activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyTrend {
    /// Hour of day (0-23) the bucket starts in
    pub hour: u32,
    /// Events in the bucket
    pub count: usize,
    /// Critical events in the bucket
    pub critical: usize,
    /// High-severity events in the bucket
    pub high: usize,
}

impl SiemService {
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

    fn can_view(&self, ctx: &RequestContext) -> Result<bool> {
        self.directory.resolve(ctx).ok_or(OpsError::Unauthenticated)?;
        let profile = self.profiles.caller_profile(ctx);
        Ok(evaluator::has_permission(
            profile.as_ref(),
            Permission::ViewSiem,
        ))
    }

    /// Filtered network events, newest first.
    ///
    /// `Unauthenticated` when the caller does not resolve; empty when the
    /// caller lacks `view_siem`.
    pub async fn network_events(
        &self,
        ctx: &RequestContext,
        filter: NetworkEventFilter,
    ) -> Result<Vec<NetworkEvent>> {
        if !self.can_view(ctx)? {
            return Ok(Vec::new());
        }

        let cutoff = filter
            .time_range_ms
            .map(|range| current_timestamp_millis() - range);

        let mut events = self.storage.network_events.find(|e| {
            filter.severity.map_or(true, |s| e.severity == s)
                && filter.event_type.map_or(true, |t| e.event_type == t)
                && cutoff.map_or(true, |c| e.timestamp >= c)
        });
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        events.truncate(filter.limit.unwrap_or(DEFAULT_EVENT_LIMIT));
        Ok(events)
    }

    /// Aggregate counts for the SIEM dashboard.
    ///
    /// `Unauthenticated` when the caller does not resolve; `None` when the
    /// caller lacks `view_siem`.
    pub async fn stats(&self, ctx: &RequestContext) -> Result<Option<SiemStats>> {
        if !self.can_view(ctx)? {
            return Ok(None);
        }

        let now = current_timestamp_millis();
        let all_events = self.storage.network_events.all();
        let recent: Vec<&NetworkEvent> = all_events
            .iter()
            .filter(|e| e.timestamp >= now - DAY_MS)
            .collect();

        let count_severity =
            |s: Severity| recent.iter().filter(|e| e.severity == s).count();
        let count_status =
            |s: NetworkEventStatus| recent.iter().filter(|e| e.status == s).count();

        let mut events_by_type: HashMap<NetworkEventType, usize> = HashMap::new();
        for event in &recent {
            *events_by_type.entry(event.event_type).or_insert(0) += 1;
        }

        Ok(Some(SiemStats {
            total_events: all_events.len(),
            recent_events: recent.len(),
            critical_events: count_severity(Severity::Critical),
            high_events: count_severity(Severity::High),
            medium_events: count_severity(Severity::Medium),
            low_events: count_severity(Severity::Low),
            blocked_events: count_status(NetworkEventStatus::Blocked),
            detected_events: count_status(NetworkEventStatus::Detected),
            events_by_type,
            top_source_ips: top_source_ips(&recent),
            threat_trends: threat_trends(&all_events, now),
        }))
    }

    /// Record a network event. Requires `manage_siem`.
    pub async fn create_network_event(
        &self,
        ctx: &RequestContext,
        new: NewNetworkEvent,
    ) -> Result<RecordId> {
        self.require_manage(ctx)?;

        let event = NetworkEvent {
            id: RecordId::new(),
            timestamp: current_timestamp_millis(),
            event_type: new.event_type,
            severity: new.severity,
            source_ip: new.source_ip,
            destination_ip: new.destination_ip,
            port: new.port,
            protocol: new.protocol,
            status: new.status,
            description: new.description,
            user_id: new.user_id,
            location: new.location,
            metadata: new.metadata,
        };
        let id = self.storage.network_events.insert(event)?;

        self.audit
            .record(
                ctx,
                "create_network_event",
                "networkEvents",
                Some(id.to_string()),
                None,
            )
            .await;
        Ok(id)
    }

    /// Correlation rules; same gating as [`Self::network_events`]
    pub async fn siem_rules(&self, ctx: &RequestContext) -> Result<Vec<SiemRule>> {
        if !self.can_view(ctx)? {
            return Ok(Vec::new());
        }
        Ok(self.storage.siem_rules.all())
    }

    /// Create a correlation rule, active by default. Requires `manage_siem`.
    pub async fn create_siem_rule(
        &self,
        ctx: &RequestContext,
        new: NewSiemRule,
    ) -> Result<RecordId> {
        let user_id = self.require_manage(ctx)?;

        let rule = SiemRule {
            id: RecordId::new(),
            name: new.name,
            description: new.description,
            event_type: new.event_type,
            conditions: new.conditions,
            severity: new.severity,
            is_active: true,
            actions: new.actions,
            created_by: user_id,
        };
        let id = self.storage.siem_rules.insert(rule)?;

        info!(rule = %id, "SIEM rule created");
        self.audit
            .record(ctx, "create_siem_rule", "siemRules", Some(id.to_string()), None)
            .await;
        Ok(id)
    }

    fn require_manage(&self, ctx: &RequestContext) -> Result<crate::identity::UserId> {
        let user_id = self.directory.resolve(ctx).ok_or(OpsError::Unauthenticated)?;
        let profile = self.profiles.caller_profile(ctx);
        if !evaluator::has_permission(profile.as_ref(), Permission::ManageSiem) {
            return Err(OpsError::denied(Permission::ManageSiem));
        }
        Ok(user_id)
    }
}

fn top_source_ips(events: &[&NetworkEvent]) -> Vec<IpCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for event in events {
        *counts.entry(event.source_ip.as_str()).or_insert(0) += 1;
    }
    let mut ranked: Vec<IpCount> = counts
        .into_iter()
        .map(|(ip, count)| IpCount {
            ip: ip.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.ip.cmp(&b.ip)));
    ranked.truncate(10);
    ranked
}

fn threat_trends(events: &[NetworkEvent], now: i64) -> Vec<HourlyTrend> {
    let mut trends = Vec::with_capacity(24);
    for i in (0..24).rev() {
        let hour_start = now - (i + 1) * HOUR_MS;
        let hour_end = now - i * HOUR_MS;
        let bucket: Vec<&NetworkEvent> = events
            .iter()
            .filter(|e| e.timestamp >= hour_start && e.timestamp < hour_end)
            .collect();
        trends.push(HourlyTrend {
            hour: (chrono::DateTime::from_timestamp_millis(hour_start)
                .map(|dt| chrono::Timelike::hour(&dt))
                .unwrap_or(0)),
            count: bucket.len(),
            critical: bucket
                .iter()
                .filter(|e| e.severity == Severity::Critical)
                .count(),
            high: bucket
                .iter()
                .filter(|e| e.severity == Severity::High)
                .count(),
        });
    }
    trends
}

//! Storage layer for sentryops
//!
//! Persistence is modeled as a keyed record store with query-by-index
//! capability, provided here as typed in-memory collections. Each logical
//! operation runs against a single collection lock, which gives the
//! per-operation atomicity and snapshot-consistent reads the core relies on.

mod memory;

pub use memory::{Collection, Document, RecordId};

use crate::core::models::{Bodyguard, CctvCamera, GuardDog, NetworkEvent, SecurityEvent, SiemRule};
use crate::rbac::types::{AuditLogEntry, RolePermissionRecord, UserProfile};
use tracing::info;

/// Main storage layer holding one collection per record type.
///
/// Collection names mirror the reference deployment's table names so audit
/// entries and log lines line up with the original data model.
#[derive(Debug)]
pub struct StorageLayer {
    /// User authorization profiles
    pub profiles: Collection<UserProfile>,
    /// Persisted mirror of the role→permission catalog
    pub role_permissions: Collection<RolePermissionRecord>,
    /// Append-only audit trail
    pub audit_logs: Collection<AuditLogEntry>,
    /// Guard dog roster
    pub guard_dogs: Collection<GuardDog>,
    /// Bodyguard roster
    pub bodyguards: Collection<Bodyguard>,
    /// CCTV camera inventory
    pub cameras: Collection<CctvCamera>,
    /// Physical security events
    pub security_events: Collection<SecurityEvent>,
    /// Network events feeding the SIEM views
    pub network_events: Collection<NetworkEvent>,
    /// SIEM correlation rules
    pub siem_rules: Collection<SiemRule>,
}

impl StorageLayer {
    /// Create an empty storage layer
    pub fn new() -> Self {
        info!("Initializing storage layer");

        Self {
            profiles: Collection::new("userProfiles"),
            role_permissions: Collection::new("rolePermissions"),
            audit_logs: Collection::new("auditLogs"),
            guard_dogs: Collection::new("guardDogs"),
            bodyguards: Collection::new("bodyguards"),
            cameras: Collection::new("cctvCameras"),
            security_events: Collection::new("securityEvents"),
            network_events: Collection::new("networkEvents"),
            siem_rules: Collection::new("siemRules"),
        }
    }
}

impl Default for StorageLayer {
    fn default() -> Self {
        Self::new()
    }
}

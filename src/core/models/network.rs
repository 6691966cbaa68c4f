//! Network event and SIEM rule records

use super::common::Severity;
use crate::identity::UserId;
use crate::storage::{Document, RecordId};
use serde::{Deserialize, Serialize};

/// A network event feeding the SIEM views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEvent {
    /// Record identifier
    pub id: RecordId,
    /// When the event occurred, milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Event kind
    pub event_type: NetworkEventType,
    /// Severity
    pub severity: Severity,
    /// Source IP address
    pub source_ip: String,
    /// Destination IP address
    pub destination_ip: Option<String>,
    /// Destination port
    pub port: Option<u16>,
    /// Protocol (e.g. "tcp", "udp")
    pub protocol: Option<String>,
    /// Disposition of the event
    pub status: NetworkEventStatus,
    /// Operator-facing description
    pub description: String,
    /// Account involved, when known
    pub user_id: Option<String>,
    /// Network location or segment
    pub location: Option<String>,
    /// Loosely-structured detail (attempt counts, malware names, ...)
    pub metadata: Option<serde_json::Value>,
}

impl Document for NetworkEvent {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Network event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkEventType {
    LoginAttempt,
    NetworkScan,
    MalwareDetected,
    DataExfiltration,
    PrivilegeEscalation,
    FirewallBlock,
    IntrusionDetection,
    DdosAttack,
    SuspiciousTraffic,
}

/// Disposition of a network event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkEventStatus {
    Allowed,
    Blocked,
    Failed,
    Detected,
    Quarantined,
}

/// A correlation rule evaluated against incoming network events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiemRule {
    /// Record identifier
    pub id: RecordId,
    /// Rule name
    pub name: String,
    /// What the rule detects
    pub description: String,
    /// Event kind this rule applies to (wire-format name)
    pub event_type: String,
    /// Match conditions, all must hold
    pub conditions: Vec<SiemRuleCondition>,
    /// Severity assigned on match
    pub severity: Severity,
    /// Whether the rule is evaluated
    pub is_active: bool,
    /// Actions taken on match (e.g. "alert", "block_ip")
    pub actions: Vec<String>,
    /// Who created the rule
    pub created_by: UserId,
}

impl Document for SiemRule {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// A single field/operator/value condition within a rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiemRuleCondition {
    /// Event field to inspect
    pub field: String,
    /// Comparison operator (e.g. "eq", "gt", "contains")
    pub operator: String,
    /// Value to compare against
    pub value: String,
}

//! Physical security event records

use super::common::{Severity, ZonedLocation};
use crate::storage::{Document, RecordId};
use serde::{Deserialize, Serialize};

/// A physical security event raised by a camera, dog, guard, or the system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityEvent {
    /// Record identifier
    pub id: RecordId,
    /// Event kind
    pub event_type: SecurityEventType,
    /// Severity
    pub severity: Severity,
    /// Operator-facing description
    pub description: String,
    /// Where it happened
    pub location: ZonedLocation,
    /// Identifier of the reporting source (camera id, dog name, ...)
    pub source_id: String,
    /// Kind of reporting source
    pub source_type: EventSource,
    /// Whether the event has been resolved
    pub is_resolved: bool,
    /// Who resolved it
    pub resolved_by: Option<String>,
    /// When it was resolved, milliseconds since the Unix epoch
    pub resolved_at: Option<i64>,
    /// Optional detection metadata
    pub metadata: Option<EventMetadata>,
    /// When the event was recorded, milliseconds since the Unix epoch
    pub recorded_at: i64,
}

impl Document for SecurityEvent {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Physical security event kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityEventType {
    MotionDetected,
    IntrusionAlert,
    FaceRecognized,
    PatrolCompleted,
    Emergency,
    SystemAlert,
}

/// What kind of source reported an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    Camera,
    Dog,
    Guard,
    System,
}

/// Optional detection detail attached to an event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Captured frame, when the source is a camera
    pub image_url: Option<String>,
    /// Detection confidence, 0.0 to 1.0
    pub confidence: Option<f64>,
    /// Free-form detail
    pub additional_info: Option<String>,
}

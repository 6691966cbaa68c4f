//! Bodyguard records

use super::common::GeoPoint;
use crate::storage::{Document, RecordId};
use serde::{Deserialize, Serialize};

/// Bodyguard roster entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bodyguard {
    /// Record identifier
    pub id: RecordId,
    /// Guard's name
    pub name: String,
    /// Employee identifier
    pub employee_id: String,
    /// Zone this guard covers
    pub assigned_zone: String,
    /// Shift status
    pub status: GuardStatus,
    /// What the guard is currently doing
    pub current_activity: String,
    /// Shift start, milliseconds since the Unix epoch
    pub shift_start: i64,
    /// Shift end, milliseconds since the Unix epoch
    pub shift_end: i64,
    /// Current position
    pub location: GeoPoint,
    /// Phone or radio contact
    pub contact: String,
    /// Held certifications
    pub certifications: Vec<String>,
}

impl Document for Bodyguard {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Bodyguard shift status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardStatus {
    OnDuty,
    OffDuty,
    Break,
    Emergency,
}

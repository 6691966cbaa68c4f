//! Guard dog records

use super::common::ZonedLocation;
use crate::storage::{Document, RecordId};
use serde::{Deserialize, Serialize};

/// Guard dog roster entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardDog {
    /// Record identifier
    pub id: RecordId,
    /// Dog's name
    pub name: String,
    /// Breed
    pub breed: String,
    /// Age in years
    pub age: u8,
    /// Duty status
    pub status: DogStatus,
    /// Current position and zone
    pub location: ZonedLocation,
    /// Assigned handler
    pub handler: HandlerContact,
    /// Latest health readings
    pub health_metrics: HealthMetrics,
    /// Last patrol completion, milliseconds since the Unix epoch
    pub last_patrol: i64,
    /// Derived from `status`: true iff active
    pub is_on_duty: bool,
}

impl Document for GuardDog {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Guard dog duty status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DogStatus {
    Active,
    Resting,
    Offline,
    Medical,
}

/// Handler contact details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerContact {
    /// Handler name
    pub name: String,
    /// Phone or radio contact
    pub contact: String,
}

/// Health telemetry for a dog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Heart rate, beats per minute
    pub heart_rate: u32,
    /// Body temperature, Fahrenheit
    pub temperature: f64,
    /// Last veterinary checkup, milliseconds since the Unix epoch
    pub last_checkup: i64,
}

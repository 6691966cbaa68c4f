//! CCTV camera records

use crate::storage::{Document, RecordId};
use serde::{Deserialize, Serialize};

/// CCTV camera inventory entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CctvCamera {
    /// Record identifier
    pub id: RecordId,
    /// Operator-facing camera identifier (e.g. "CAM-017")
    pub camera_id: String,
    /// Camera name
    pub name: String,
    /// Mount position
    pub location: CameraLocation,
    /// Operational status
    pub status: CameraStatus,
    /// Whether footage is currently being recorded
    pub is_recording: bool,
    /// Last heartbeat, milliseconds since the Unix epoch
    pub last_ping: i64,
    /// Enabled AI analysis features
    pub ai_features: AiFeatures,
    /// Stream resolution (e.g. "4K", "1080p")
    pub resolution: String,
    /// Night vision capable
    pub night_vision: bool,
}

impl Document for CctvCamera {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Camera mount position, zone, and placement note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraLocation {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Zone the camera watches
    pub zone: String,
    /// Placement description
    pub description: String,
}

/// Camera operational status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraStatus {
    Online,
    Offline,
    Maintenance,
    Error,
}

/// AI analysis feature toggles
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AiFeatures {
    /// Motion detection enabled
    pub motion_detection: bool,
    /// Face recognition enabled
    pub face_recognition: bool,
    /// Intrusion detection enabled
    pub intrusion_detection: bool,
}

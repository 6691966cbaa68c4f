//! Demo data seeding
//!
//! Replaces the operational collections with a small fixed roster so a fresh
//! deployment has something to show. Ungated, for development environments.

use crate::core::models::{
    AiFeatures, Bodyguard, CameraLocation, CameraStatus, CctvCamera, DogStatus, EventMetadata,
    EventSource, GeoPoint, GuardDog, GuardStatus, HandlerContact, HealthMetrics, NetworkEvent,
    NetworkEventStatus, NetworkEventType, SecurityEvent, SecurityEventType, Severity,
    ZonedLocation,
};
use crate::rbac::types::InitializeOutcome;
use crate::storage::{RecordId, StorageLayer};
use crate::utils::current_timestamp_millis;
use std::sync::Arc;
use tracing::info;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Replace dogs, guards, cameras, and both event streams with demo records
pub fn seed_security_data(storage: &Arc<StorageLayer>) -> InitializeOutcome {
    let now = current_timestamp_millis();

    storage.guard_dogs.replace_all(demo_dogs(now));
    storage.bodyguards.replace_all(demo_guards(now));
    storage.cameras.replace_all(demo_cameras(now));
    storage.security_events.replace_all(demo_events(now));
    storage.network_events.replace_all(demo_network_events(now));

    info!("demo security data seeded");
    InitializeOutcome {
        success: true,
        message: "Security data seeded successfully".to_string(),
    }
}

fn demo_dogs(now: i64) -> Vec<GuardDog> {
    vec![
        GuardDog {
            id: RecordId::new(),
            name: "Rex".to_string(),
            breed: "German Shepherd".to_string(),
            age: 4,
            status: DogStatus::Active,
            location: ZonedLocation {
                lat: 40.7128,
                lng: -74.0060,
                zone: "Main Building".to_string(),
            },
            handler: HandlerContact {
                name: "John Smith".to_string(),
                contact: "+1-555-0101".to_string(),
            },
            health_metrics: HealthMetrics {
                heart_rate: 85,
                temperature: 101.5,
                last_checkup: now - DAY_MS,
            },
            last_patrol: now - HOUR_MS,
            is_on_duty: true,
        },
        GuardDog {
            id: RecordId::new(),
            name: "Luna".to_string(),
            breed: "Belgian Malinois".to_string(),
            age: 3,
            status: DogStatus::Active,
            location: ZonedLocation {
                lat: 40.7130,
                lng: -74.0058,
                zone: "North Gate".to_string(),
            },
            handler: HandlerContact {
                name: "Sarah Johnson".to_string(),
                contact: "+1-555-0102".to_string(),
            },
            health_metrics: HealthMetrics {
                heart_rate: 90,
                temperature: 101.8,
                last_checkup: now - 2 * DAY_MS,
            },
            last_patrol: now - 30 * MINUTE_MS,
            is_on_duty: true,
        },
        GuardDog {
            id: RecordId::new(),
            name: "Max".to_string(),
            breed: "Rottweiler".to_string(),
            age: 5,
            status: DogStatus::Resting,
            location: ZonedLocation {
                lat: 40.7125,
                lng: -74.0065,
                zone: "South Entrance".to_string(),
            },
            handler: HandlerContact {
                name: "Mike Wilson".to_string(),
                contact: "+1-555-0103".to_string(),
            },
            health_metrics: HealthMetrics {
                heart_rate: 75,
                temperature: 101.2,
                last_checkup: now - 3 * DAY_MS,
            },
            last_patrol: now - 2 * HOUR_MS,
            is_on_duty: false,
        },
    ]
}

fn demo_guards(now: i64) -> Vec<Bodyguard> {
    vec![
        Bodyguard {
            id: RecordId::new(),
            name: "Alex Rodriguez".to_string(),
            employee_id: "BG001".to_string(),
            assigned_zone: "Main Building".to_string(),
            status: GuardStatus::OnDuty,
            current_activity: "Perimeter patrol".to_string(),
            shift_start: now - 4 * HOUR_MS,
            shift_end: now + 4 * HOUR_MS,
            location: GeoPoint {
                lat: 40.7128,
                lng: -74.0060,
            },
            contact: "+1-555-0201".to_string(),
            certifications: vec![
                "Armed Security".to_string(),
                "First Aid".to_string(),
                "CPR".to_string(),
            ],
        },
        Bodyguard {
            id: RecordId::new(),
            name: "Maria Garcia".to_string(),
            employee_id: "BG002".to_string(),
            assigned_zone: "North Gate".to_string(),
            status: GuardStatus::OnDuty,
            current_activity: "Access control".to_string(),
            shift_start: now - 3 * HOUR_MS,
            shift_end: now + 17400000,
            location: GeoPoint {
                lat: 40.7130,
                lng: -74.0058,
            },
            contact: "+1-555-0202".to_string(),
            certifications: vec![
                "Security Guard License".to_string(),
                "Crowd Control".to_string(),
            ],
        },
        Bodyguard {
            id: RecordId::new(),
            name: "David Chen".to_string(),
            employee_id: "BG003".to_string(),
            assigned_zone: "Control Room".to_string(),
            status: GuardStatus::Break,
            current_activity: "Break time".to_string(),
            shift_start: now - 2 * HOUR_MS,
            shift_end: now + 6 * HOUR_MS,
            location: GeoPoint {
                lat: 40.7126,
                lng: -74.0062,
            },
            contact: "+1-555-0203".to_string(),
            certifications: vec![
                "CCTV Operations".to_string(),
                "Emergency Response".to_string(),
            ],
        },
    ]
}

fn demo_cameras(now: i64) -> Vec<CctvCamera> {
    vec![
        CctvCamera {
            id: RecordId::new(),
            camera_id: "CAM001".to_string(),
            name: "Main Entrance Camera".to_string(),
            location: CameraLocation {
                lat: 40.7128,
                lng: -74.0060,
                zone: "Main Building".to_string(),
                description: "Primary entrance monitoring".to_string(),
            },
            status: CameraStatus::Online,
            is_recording: true,
            last_ping: now - 30 * 1000,
            ai_features: AiFeatures {
                motion_detection: true,
                face_recognition: true,
                intrusion_detection: true,
            },
            resolution: "4K".to_string(),
            night_vision: true,
        },
        CctvCamera {
            id: RecordId::new(),
            camera_id: "CAM002".to_string(),
            name: "North Gate Camera".to_string(),
            location: CameraLocation {
                lat: 40.7130,
                lng: -74.0058,
                zone: "North Gate".to_string(),
                description: "North entrance security".to_string(),
            },
            status: CameraStatus::Online,
            is_recording: true,
            last_ping: now - 45 * 1000,
            ai_features: AiFeatures {
                motion_detection: true,
                face_recognition: false,
                intrusion_detection: true,
            },
            resolution: "1080p".to_string(),
            night_vision: true,
        },
        CctvCamera {
            id: RecordId::new(),
            camera_id: "CAM003".to_string(),
            name: "Parking Lot Camera".to_string(),
            location: CameraLocation {
                lat: 40.7125,
                lng: -74.0065,
                zone: "Parking Lot".to_string(),
                description: "Vehicle monitoring".to_string(),
            },
            status: CameraStatus::Maintenance,
            is_recording: false,
            last_ping: now - 5 * MINUTE_MS,
            ai_features: AiFeatures {
                motion_detection: true,
                face_recognition: false,
                intrusion_detection: false,
            },
            resolution: "1080p".to_string(),
            night_vision: false,
        },
    ]
}

fn demo_events(now: i64) -> Vec<SecurityEvent> {
    vec![
        SecurityEvent {
            id: RecordId::new(),
            event_type: SecurityEventType::MotionDetected,
            severity: Severity::Low,
            description: "Motion detected in parking lot".to_string(),
            location: ZonedLocation {
                lat: 40.7125,
                lng: -74.0065,
                zone: "Parking Lot".to_string(),
            },
            source_id: "CAM003".to_string(),
            source_type: EventSource::Camera,
            is_resolved: true,
            resolved_by: Some("David Chen".to_string()),
            resolved_at: Some(now - 30 * MINUTE_MS),
            metadata: Some(EventMetadata {
                image_url: None,
                confidence: Some(0.85),
                additional_info: Some("Vehicle movement detected".to_string()),
            }),
            recorded_at: now - 35 * MINUTE_MS,
        },
        SecurityEvent {
            id: RecordId::new(),
            event_type: SecurityEventType::IntrusionAlert,
            severity: Severity::High,
            description: "Unauthorized access attempt at north gate".to_string(),
            location: ZonedLocation {
                lat: 40.7130,
                lng: -74.0058,
                zone: "North Gate".to_string(),
            },
            source_id: "CAM002".to_string(),
            source_type: EventSource::Camera,
            is_resolved: false,
            resolved_by: None,
            resolved_at: None,
            metadata: Some(EventMetadata {
                image_url: None,
                confidence: Some(0.92),
                additional_info: Some("Person without valid credentials".to_string()),
            }),
            recorded_at: now - 10 * MINUTE_MS,
        },
        SecurityEvent {
            id: RecordId::new(),
            event_type: SecurityEventType::PatrolCompleted,
            severity: Severity::Low,
            description: "K9 patrol completed successfully".to_string(),
            location: ZonedLocation {
                lat: 40.7128,
                lng: -74.0060,
                zone: "Main Building".to_string(),
            },
            source_id: "Rex".to_string(),
            source_type: EventSource::Dog,
            is_resolved: true,
            resolved_by: Some("John Smith".to_string()),
            resolved_at: Some(now - HOUR_MS),
            metadata: Some(EventMetadata {
                image_url: None,
                confidence: None,
                additional_info: Some("All areas clear".to_string()),
            }),
            recorded_at: now - 70 * MINUTE_MS,
        },
    ]
}

fn demo_network_events(now: i64) -> Vec<NetworkEvent> {
    vec![
        NetworkEvent {
            id: RecordId::new(),
            timestamp: now - 5 * MINUTE_MS,
            event_type: NetworkEventType::LoginAttempt,
            severity: Severity::Medium,
            source_ip: "192.168.1.100".to_string(),
            destination_ip: Some("10.0.0.1".to_string()),
            port: Some(22),
            protocol: Some("SSH".to_string()),
            status: NetworkEventStatus::Failed,
            description: "Failed SSH login attempt".to_string(),
            user_id: Some("admin".to_string()),
            location: Some("Main Building".to_string()),
            metadata: Some(serde_json::json!({
                "attempts": 3,
                "userAgent": "OpenSSH_8.0",
                "geoLocation": "New York, US",
            })),
        },
        NetworkEvent {
            id: RecordId::new(),
            timestamp: now - 10 * MINUTE_MS,
            event_type: NetworkEventType::NetworkScan,
            severity: Severity::High,
            source_ip: "203.0.113.45".to_string(),
            destination_ip: Some("10.0.0.0/24".to_string()),
            port: Some(80),
            protocol: Some("TCP".to_string()),
            status: NetworkEventStatus::Blocked,
            description: "Port scan detected from external IP".to_string(),
            user_id: None,
            location: Some("Network Perimeter".to_string()),
            metadata: Some(serde_json::json!({
                "portsScanned": 1024,
                "duration": 120,
                "geoLocation": "Unknown",
            })),
        },
        NetworkEvent {
            id: RecordId::new(),
            timestamp: now - 15 * MINUTE_MS,
            event_type: NetworkEventType::MalwareDetected,
            severity: Severity::Critical,
            source_ip: "192.168.1.150".to_string(),
            destination_ip: Some("185.220.101.42".to_string()),
            port: Some(443),
            protocol: Some("HTTPS".to_string()),
            status: NetworkEventStatus::Quarantined,
            description: "Malware communication blocked".to_string(),
            user_id: None,
            location: Some("Workstation-15".to_string()),
            metadata: Some(serde_json::json!({
                "malwareType": "Trojan.Generic",
                "fileName": "suspicious.exe",
                "hash": "a1b2c3d4e5f6",
            })),
        },
        NetworkEvent {
            id: RecordId::new(),
            timestamp: now - 20 * MINUTE_MS,
            event_type: NetworkEventType::DataExfiltration,
            severity: Severity::Critical,
            source_ip: "192.168.1.200".to_string(),
            destination_ip: Some("198.51.100.10".to_string()),
            port: Some(443),
            protocol: Some("HTTPS".to_string()),
            status: NetworkEventStatus::Blocked,
            description: "Suspicious large data transfer blocked".to_string(),
            user_id: Some("user123".to_string()),
            location: Some("Finance Department".to_string()),
            metadata: Some(serde_json::json!({
                "dataSize": "500MB",
                "transferDuration": 300,
                "fileTypes": ["xlsx", "pdf", "docx"],
            })),
        },
        NetworkEvent {
            id: RecordId::new(),
            timestamp: now - 30 * MINUTE_MS,
            event_type: NetworkEventType::PrivilegeEscalation,
            severity: Severity::High,
            source_ip: "192.168.1.75".to_string(),
            destination_ip: None,
            port: Some(3389),
            protocol: Some("RDP".to_string()),
            status: NetworkEventStatus::Detected,
            description: "Privilege escalation attempt detected".to_string(),
            user_id: Some("temp_user".to_string()),
            location: Some("IT Department".to_string()),
            metadata: Some(serde_json::json!({
                "targetAccount": "administrator",
                "method": "Token Manipulation",
                "processName": "powershell.exe",
            })),
        },
    ]
}

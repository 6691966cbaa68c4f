//! Domain records tracked by the dashboard
//!
//! Field sets mirror the reference deployment's tables; enums replace its
//! string literals, with snake_case at the serialization edge.

mod camera;
mod common;
mod dog;
mod event;
mod guard;
mod network;

pub use camera::{AiFeatures, CameraLocation, CameraStatus, CctvCamera};
pub use common::{GeoPoint, Severity, ZonedLocation};
pub use dog::{DogStatus, GuardDog, HandlerContact, HealthMetrics};
pub use event::{EventMetadata, EventSource, SecurityEvent, SecurityEventType};
pub use guard::{Bodyguard, GuardStatus};
pub use network::{NetworkEvent, NetworkEventStatus, NetworkEventType, SiemRule, SiemRuleCondition};

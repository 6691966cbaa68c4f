//! Types shared across domain records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Plain coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

/// Coordinate pair tagged with the zone it falls in.
///
/// The zone name is what zone-scoped visibility filters on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonedLocation {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Zone name
    pub zone: String,
}

/// Event severity, shared by physical and network events
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        };
        f.write_str(s)
    }
}

//! Authentication and bootstrap configuration

use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Session token time-to-live in seconds
    #[serde(default = "default_session_ttl")]
    pub session_ttl: u64,
    /// Defaults applied to self-service bootstrap profiles
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl: default_session_ttl(),
            bootstrap: BootstrapConfig::default(),
        }
    }
}

/// Defaults for profiles created through the self-service bootstrap path.
///
/// The first authenticated caller with no existing admin profile becomes the
/// admin; every later self-service profile becomes a viewer. Both get these
/// department/zone defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Department assigned to bootstrap profiles
    #[serde(default = "default_department")]
    pub department: String,
    /// Zones assigned to bootstrap profiles
    #[serde(default = "default_zones")]
    pub assigned_zones: Vec<String>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            department: default_department(),
            assigned_zones: default_zones(),
        }
    }
}

fn default_session_ttl() -> u64 {
    86_400
}

fn default_department() -> String {
    "Administration".to_string()
}

fn default_zones() -> Vec<String> {
    vec!["Main Building".to_string()]
}

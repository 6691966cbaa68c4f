//! Configuration management
//!
//! This module handles loading and validation of the sentryops configuration.
//! Configuration is read from a YAML file and can be overridden from
//! environment variables.

mod auth;

pub use auth::{AuthConfig, BootstrapConfig};

use crate::utils::error::{OpsError, Result};
use crate::utils::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for sentryops
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Authentication and bootstrap configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| OpsError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| OpsError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables, starting from defaults
    pub fn from_env() -> Result<Self> {
        debug!("Loading configuration from environment variables");

        let mut config = Self::default();

        if let Ok(level) = env::var("SENTRYOPS_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(department) = env::var("SENTRYOPS_BOOTSTRAP_DEPARTMENT") {
            config.auth.bootstrap.department = department;
        }
        if let Ok(zones) = env::var("SENTRYOPS_BOOTSTRAP_ZONES") {
            config.auth.bootstrap.assigned_zones =
                zones.split(',').map(|z| z.trim().to_string()).collect();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.bootstrap.department.is_empty() {
            return Err(OpsError::Config(
                "bootstrap department must not be empty".to_string(),
            ));
        }
        if self.auth.bootstrap.assigned_zones.is_empty() {
            return Err(OpsError::Config(
                "bootstrap zones must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

//! Error handling for sentryops
//!
//! This module defines the error taxonomy used throughout the crate.
//!
//! Two failure philosophies coexist deliberately: read paths are fail-soft
//! (unauthorized or unresolved callers get `None` / empty collections, never
//! an error), while write paths are fail-loud and surface one of the
//! authorization variants below. Keep that split intact when adding
//! operations: a read that throws or a write that swallows breaks callers.

use thiserror::Error;

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, OpsError>;

/// Main error type for sentryops
#[derive(Error, Debug)]
pub enum OpsError {
    /// Caller identity could not be resolved on a write path
    #[error("Not authenticated")]
    Unauthenticated,

    /// Caller resolved but lacks the required permission
    #[error("Insufficient permissions: {0}")]
    PermissionDenied(String),

    /// Uniqueness violation (e.g. a second profile for the same user)
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Record lookup by id found nothing on a write path
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Entity store errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl OpsError {
    /// Construct a `PermissionDenied` naming the missing permission
    pub fn denied(permission: impl std::fmt::Display) -> Self {
        OpsError::PermissionDenied(format!("missing permission: {}", permission))
    }

    /// Whether this error is an authorization failure (as opposed to an
    /// infrastructure or validation failure)
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            OpsError::Unauthenticated | OpsError::PermissionDenied(_)
        )
    }
}

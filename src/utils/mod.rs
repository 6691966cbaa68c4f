//! Utility modules for sentryops
//!
//! - **error**: the crate-wide error taxonomy and `Result` alias
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{OpsError, Result};
pub use logging::LoggingConfig;

/// Git commit the binary was built from, embedded by the build script
pub const GIT_HASH: &str = env!("GIT_HASH");

/// Build time as seconds since the Unix epoch, embedded by the build script
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Current timestamp in milliseconds since the Unix epoch.
///
/// Domain records carry millisecond timestamps (`last_patrol`, `last_ping`,
/// `last_login`) rather than `DateTime` so they serialize compactly.
pub fn current_timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

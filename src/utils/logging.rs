//! Logging setup
//!
//! Thin wrapper over `tracing-subscriber` so binaries and tests initialize
//! logging the same way. The filter comes from `RUST_LOG` when set, falling
//! back to the level in [`LoggingConfig`].

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON-formatted log lines
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once; subsequent calls are no-ops (useful in
/// tests where several cases may race to initialize).
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    // A second init in the same process is fine; keep the first subscriber.
    let _ = result;
}

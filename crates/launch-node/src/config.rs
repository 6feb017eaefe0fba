//! # Node Configuration
//!
//! Runtime parameters, read from the environment.

use lp_02_launch::{ConfigError, LaunchConfig};
use std::env;

/// Complete node configuration.
#[derive(Debug, Clone)]
pub struct NodeConfig {
    /// Launch window parameters handed to the launch service.
    pub launch: LaunchConfig,

    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,

    /// Stop replay at the first broken invariant.
    pub halt_on_invariant: bool,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            launch: LaunchConfig::default(),
            log_level: "info".to_string(),
            halt_on_invariant: true,
        }
    }
}

impl NodeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LP_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `LP_HALT_ON_INVARIANT`: Halt on a broken invariant (default: true)
    /// - `LP_MIN_LAUNCH_TIME`, `LP_MAX_LAUNCH_TIME`, `LP_REVERT_DELAY`:
    ///   see [`LaunchConfig::from_env`]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`NodeConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            launch: LaunchConfig::from_lookup(&lookup),
            log_level: lookup("LP_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or_else(|| "info".to_string()),
            halt_on_invariant: lookup("LP_HALT_ON_INVARIANT")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(true),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.launch.validate()
    }
}

//! Launch window configuration from environment variables.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Two weeks, in seconds.
pub const DEFAULT_MAX_LAUNCH_TIME: u64 = 1_209_600;

/// One hour, in seconds.
pub const DEFAULT_REVERT_DELAY: u64 = 3_600;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("min launch time {min} is greater than max launch time {max}")]
    LaunchWindow { min: u64, max: u64 },
}

/// Parameters of the trigger/revert launch window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Smallest accepted `remaining_time` when triggering a launch.
    pub min_launch_time: u64,

    /// Largest accepted `remaining_time` when triggering a launch.
    pub max_launch_time: u64,

    /// Time after the launch timestamp before a trigger can be reverted.
    pub revert_delay: u64,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            min_launch_time: 0,
            max_launch_time: DEFAULT_MAX_LAUNCH_TIME,
            revert_delay: DEFAULT_REVERT_DELAY,
        }
    }
}

impl LaunchConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LP_MIN_LAUNCH_TIME`: seconds (default: 0)
    /// - `LP_MAX_LAUNCH_TIME`: seconds (default: 1209600)
    /// - `LP_REVERT_DELAY`: seconds (default: 3600)
    ///
    /// Unparsable values keep the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`LaunchConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            min_launch_time: read("LP_MIN_LAUNCH_TIME", defaults.min_launch_time),
            max_launch_time: read("LP_MAX_LAUNCH_TIME", defaults.max_launch_time),
            revert_delay: read("LP_REVERT_DELAY", defaults.revert_delay),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_launch_time > self.max_launch_time {
            return Err(ConfigError::LaunchWindow {
                min: self.min_launch_time,
                max: self.max_launch_time,
            });
        }
        Ok(())
    }
}

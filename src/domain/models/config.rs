//! Configuration model for the clinic record core.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Pet cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings governing the timed pet cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Maximum age in seconds after which a cached entry is stale
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Period in seconds of the background sweep that reclaims expired
    /// entries; None disables the sweep
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: Option<u64>,

    /// How long in seconds a caller waits on another caller's in-flight
    /// load before giving up; None waits indefinitely
    #[serde(default)]
    pub load_wait_timeout_secs: Option<u64>,
}

const fn default_ttl_secs() -> u64 {
    30
}

const fn default_sweep_interval_secs() -> Option<u64> {
    Some(60)
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
            load_wait_timeout_secs: None,
        }
    }
}

impl CacheConfig {
    /// Entry time-to-live as a [`Duration`].
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Sweep period as a [`Duration`], if the sweep is enabled.
    pub const fn sweep_interval(&self) -> Option<Duration> {
        match self.sweep_interval_secs {
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        }
    }

    /// Waiter timeout as a [`Duration`], if one is configured.
    pub const fn load_wait_timeout(&self) -> Option<Duration> {
        match self.load_wait_timeout_secs {
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for log files; None logs to stdout only
    #[serde(default)]
    pub log_dir: Option<std::path::PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}

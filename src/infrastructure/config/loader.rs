//! Figment-based configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;

use crate::domain::errors::DomainError;
use crate::domain::models::Config;

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `petclinic.yaml` in the working directory (optional)
    /// 3. Environment variables (`PETCLINIC_` prefix, `__` as separator)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file("petclinic.yaml"))
            .merge(Env::prefixed("PETCLINIC_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, on top of the defaults.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    pub fn validate(config: &Config) -> Result<(), DomainError> {
        if config.cache.ttl_secs == 0 {
            return Err(DomainError::InvalidConfig(
                "cache.ttl_secs must be positive".to_string(),
            ));
        }

        if let Some(0) = config.cache.sweep_interval_secs {
            return Err(DomainError::InvalidConfig(
                "cache.sweep_interval_secs must be positive when set".to_string(),
            ));
        }

        if let Some(0) = config.cache.load_wait_timeout_secs {
            return Err(DomainError::InvalidConfig(
                "cache.load_wait_timeout_secs must be positive when set".to_string(),
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(DomainError::InvalidConfig(format!(
                "logging.level must be one of trace, debug, info, warn, error; got {}",
                config.logging.level
            )));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(DomainError::InvalidConfig(format!(
                "logging.format must be json or pretty; got {}",
                config.logging.format
            )));
        }

        Ok(())
    }
}

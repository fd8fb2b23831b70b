use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::{Config, LoggingConfig, ScanConfig};

/// Project config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "collatz-tail.yaml";

/// Prefix for environment overrides, e.g. `COLLATZ_TAIL_SCAN__BIT_WIDTH=12`
pub const ENV_PREFIX: &str = "COLLATZ_TAIL_";

/// Largest supported bit width; the scan size doubles with every bit
pub const MAX_BIT_WIDTH: u32 = 64;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bit_width: {0}. Must be between 1 and 64")]
    InvalidBitWidth(u32),

    #[error("Invalid max_iterations: {0}. Must be at least 1 when set")]
    InvalidMaxIterations(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Config file not found: {}", .0.display())]
    MissingFile(PathBuf),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. collatz-tail.yaml in the working directory (optional)
    /// 3. The explicit `--config` file, which must exist when given
    /// 4. Environment variables (`COLLATZ_TAIL_*` prefix, `__` for nesting)
    ///
    /// The result is not validated: command-line flags are layered on top by
    /// each command, which then validates the sections it reads.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.to_path_buf()).into());
            }
        }

        Self::figment(explicit)
            .extract()
            .context("Failed to extract configuration from figment")
    }

    /// The merged provider chain used by [`load`](Self::load)
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(DEFAULT_CONFIG_FILE));

        if let Some(path) = explicit {
            figment = figment.merge(Yaml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate a fully merged configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_scan(&config.scan)?;
        Self::validate_logging(&config.logging)
    }

    pub fn validate_scan(scan: &ScanConfig) -> Result<(), ConfigError> {
        let bit_width = scan.bit_width;
        if bit_width == 0 || bit_width > MAX_BIT_WIDTH {
            return Err(ConfigError::InvalidBitWidth(bit_width));
        }
        Self::validate_max_iterations(scan.max_iterations)
    }

    /// An iteration limit, when set, must allow at least one step
    pub fn validate_max_iterations(max_iterations: Option<u64>) -> Result<(), ConfigError> {
        match max_iterations {
            Some(0) => Err(ConfigError::InvalidMaxIterations(0)),
            _ => Ok(()),
        }
    }

    pub fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(logging.rotation.clone()));
        }

        Ok(())
    }
}

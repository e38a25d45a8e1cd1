//! # Runtime Configuration
//!
//! Defaults, overridden by `REGISTRY_*` environment variables, overridden by
//! CLI flags.

use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming the world state file.
pub const ENV_DATA_FILE: &str = "REGISTRY_DATA_FILE";
/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "REGISTRY_LOG";
/// Environment variable enabling seeding of an empty world state.
pub const ENV_SEED_IF_EMPTY: &str = "REGISTRY_SEED_IF_EMPTY";

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// World state file.
    pub data_file: PathBuf,
    /// `tracing` filter directive, e.g. `info` or `asset_registry=debug`.
    pub log_filter: String,
    /// Write the seed catalog when the world state is empty.
    pub seed_if_empty: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./data/world_state.bin"),
            log_filter: "info".to_string(),
            seed_if_empty: false,
        }
    }
}

impl RuntimeConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_DATA_FILE) {
            config.data_file = PathBuf::from(path);
        }
        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }
        if let Some(flag) = lookup(ENV_SEED_IF_EMPTY) {
            match parse_flag(&flag) {
                Some(seed) => config.seed_if_empty = seed,
                None => warn!("{ENV_SEED_IF_EMPTY} must be true/false, got {flag:?}"),
            }
        }

        config
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_file.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataFile);
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("world state file path is empty; set REGISTRY_DATA_FILE or --data-file")]
    EmptyDataFile,

    #[error("log filter is empty; set REGISTRY_LOG")]
    EmptyLogFilter,
}

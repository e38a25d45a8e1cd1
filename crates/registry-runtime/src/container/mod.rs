//! # Registry Container
//!
//! Wires the registry service to its world state according to the runtime
//! configuration.

pub mod config;

pub use config::{ConfigError, RuntimeConfig};

use anyhow::{Context, Result};
use asset_registry::{AssetRegistryApi, FileBackedWorldState, RegistryService};
use tracing::info;

/// The registry wired to a file-backed world state.
pub struct RegistryContainer {
    /// Configuration the container was built from.
    pub config: RuntimeConfig,
    /// The registry service.
    pub registry: RegistryService<FileBackedWorldState>,
}

impl RegistryContainer {
    /// Validate `config`, open the world state and seed it if requested.
    pub fn open(config: RuntimeConfig) -> Result<Self> {
        config.validate()?;

        let store = FileBackedWorldState::open(&config.data_file).with_context(|| {
            format!("Failed to open world state at {}", config.data_file.display())
        })?;
        let mut registry = RegistryService::new(store);

        if config.seed_if_empty && registry.store().is_empty() {
            info!("[registry] Empty world state, writing seed catalog");
            registry.seed().context("Failed to seed world state")?;
        }

        Ok(Self { config, registry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_seeds_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = RuntimeConfig {
            data_file: dir.path().join("state.bin"),
            seed_if_empty: true,
            ..RuntimeConfig::default()
        };

        let container = RegistryContainer::open(config).unwrap();
        assert!(container.registry.exists("I00000"));
        assert_eq!(container.registry.store().len(), 6);
    }

    #[test]
    fn test_open_without_seed() {
        let dir = tempfile::tempdir().unwrap();
        let config = RuntimeConfig {
            data_file: dir.path().join("state.bin"),
            ..RuntimeConfig::default()
        };

        let container = RegistryContainer::open(config).unwrap();
        assert!(container.registry.store().is_empty());
    }

    #[test]
    fn test_open_rejects_invalid_config() {
        let config = RuntimeConfig {
            data_file: std::path::PathBuf::new(),
            ..RuntimeConfig::default()
        };
        assert!(RegistryContainer::open(config).is_err());
    }
}

//! Registry builder for flexible configuration
//!
//! This module provides a builder pattern for creating registries with a
//! validated configuration, optionally loaded from a file.

use crate::config::Config;
use crate::error::Result;
use crate::registry::Registry;
use std::path::PathBuf;

/// Builder for registry configuration.
#[derive(Debug)]
pub struct RegistryBuilder {
    config: Config,
    config_path: Option<PathBuf>,
    first_id: Option<u64>,
}

impl RegistryBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            config_path: None,
            first_id: None,
        }
    }

    /// Set the registry configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON or TOML file at build time.
    ///
    /// Replaces anything set with [`config`](Self::config).
    pub fn config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Override the first id, applied after any configuration file is loaded.
    pub fn first_id(mut self, first_id: u64) -> Self {
        self.first_id = Some(first_id);
        self
    }

    /// Build the registry. Loads the configuration file if one was given,
    /// then validates the result.
    pub fn build(self) -> Result<Registry> {
        let mut config = match self.config_path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Config::from_path(&path)?
            }
            None => self.config,
        };

        if let Some(first_id) = self.first_id {
            config.first_id = first_id;
        }

        config.validate()?;
        Ok(Registry::with_config(config))
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

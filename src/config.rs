//! Registry configuration.

use crate::error::{Result, RosterError};
use std::path::Path;

/// Registry and index configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// First identity handed out by `Registry::register`
    #[serde(default = "Config::default_first_id")]
    pub first_id: u64,

    /// Initial capacity reserved in the record store
    #[serde(default = "Config::default_capacity_hint")]
    pub capacity_hint: usize,

    /// Rebuilds over more records than this are logged at warn level
    #[serde(default = "Config::default_rebuild_warn_threshold")]
    pub rebuild_warn_threshold: usize,
}

impl Config {
    /// Largest accepted `first_id`. Ids above it stay unused so the counter
    /// cannot overflow.
    pub const MAX_FIRST_ID: u64 = u64::MAX / 2;

    const fn default_first_id() -> u64 {
        1
    }

    const fn default_capacity_hint() -> usize {
        64
    }

    const fn default_rebuild_warn_threshold() -> usize {
        10_000
    }

    pub fn with_first_id(mut self, first_id: u64) -> Self {
        assert!(first_id > 0, "First id must be greater than zero");
        assert!(
            first_id <= Self::MAX_FIRST_ID,
            "First id must not exceed {}",
            Self::MAX_FIRST_ID
        );
        self.first_id = first_id;
        self
    }

    pub fn with_capacity_hint(mut self, capacity: usize) -> Self {
        if capacity > 1_000_000 {
            log::warn!(
                "Capacity hint of {} is very large; memory is reserved up front",
                capacity
            );
        }
        self.capacity_hint = capacity;
        self
    }

    pub fn with_rebuild_warn_threshold(mut self, threshold: usize) -> Self {
        assert!(threshold > 0, "Rebuild warn threshold must be greater than zero");
        self.rebuild_warn_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.first_id == 0 {
            return Err(RosterError::InvalidConfig(
                "first_id must be greater than zero".to_string(),
            ));
        }

        if self.first_id > Self::MAX_FIRST_ID {
            return Err(RosterError::InvalidConfig(format!(
                "first_id must not exceed {}, got: {}",
                Self::MAX_FIRST_ID,
                self.first_id
            )));
        }

        if self.rebuild_warn_threshold == 0 {
            return Err(RosterError::InvalidConfig(
                "rebuild_warn_threshold must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, choosing the format by extension.
    ///
    /// `.toml` files require the `toml` feature; anything else is read as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            #[cfg(feature = "toml")]
            Some("toml") => Self::from_toml(&contents),
            #[cfg(not(feature = "toml"))]
            Some("toml") => Err(RosterError::InvalidConfig(format!(
                "{} is TOML but the `toml` feature is disabled",
                path.display()
            ))),
            _ => Self::from_json(&contents),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_id: Self::default_first_id(),
            capacity_hint: Self::default_capacity_hint(),
            rebuild_warn_threshold: Self::default_rebuild_warn_threshold(),
        }
    }
}

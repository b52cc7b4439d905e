//! Error types for kdroster.
//!
//! Lookups that find nothing are not errors: `nearest` returns `None` and
//! `remove` returns `false`. `RosterError` covers input the core refuses,
//! configuration problems and I/O around the interactive shell.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RosterError>;

#[derive(Debug, Error)]
pub enum RosterError {
    /// Input that failed validation (non-finite coordinate, unparsable number)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration rejected by `Config::validate`
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

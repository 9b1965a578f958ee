//! Error types for discovery

use thiserror::Error;

/// Errors that can occur while configuring discovery
///
/// The discovery operations themselves are total; only configuration can fail.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

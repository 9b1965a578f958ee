//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur around gatekeeper operations
///
/// Gate evaluation itself never fails; errors come from configuration,
/// evidence records crossing the persistence boundary, and override reviews.
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Evidence record rejected at the boundary
    #[error("Invalid evidence: {0}")]
    InvalidEvidence(String),

    /// Approving a failed gate needs a written justification
    #[error("Override requires a clear reason (min. {required} chars) when gate is not passed, got {actual}")]
    OverrideReasonTooShort {
        /// Minimum trimmed length
        required: usize,
        /// Trimmed length supplied
        actual: usize,
    },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

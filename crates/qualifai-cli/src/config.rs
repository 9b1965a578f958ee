//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use qualifai_discovery::DiscoveryConfig;
use qualifai_gatekeeper::{GateConfig, Gatekeeper, Taxonomy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// Every section falls back to its defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Quality gate thresholds
    #[serde(default)]
    pub gate: GateConfig,

    /// Classification tables
    #[serde(default)]
    pub taxonomy: Taxonomy,

    /// Source-set caps and evidence bounds
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".qualifai").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.gate
            .validate()
            .map_err(|e| CliError::Config(format!("[gate] {}", e)))?;
        self.discovery
            .validate()
            .map_err(|e| CliError::Config(format!("[discovery] {}", e)))?;
        Ok(())
    }

    /// Gatekeeper built from the gate and taxonomy sections.
    pub fn gatekeeper(&self) -> Gatekeeper {
        Gatekeeper::with_taxonomy(self.gate.clone(), self.taxonomy.clone())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.gate, GateConfig::default());
        assert_eq!(config.discovery, DiscoveryConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(
            r#"
            [settings]
            format = "json"

            [gate]
            min_evidence_count = 4

            [taxonomy]
            pain_tags = ["planning", "scheduling"]
            "#,
        );

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.gate.min_evidence_count, 4);
        assert_eq!(config.gate.min_source_types, 2);
        assert!(config.taxonomy.is_pain_tag("scheduling"));
        assert!(config.taxonomy.is_synthetic_adapter("manual"));
        assert_eq!(config.discovery.sitemap_cap, 25);
        assert_eq!(config.gatekeeper().config().min_evidence_count, 4);
    }

    #[test]
    fn test_invalid_section_rejected() {
        let file = write_config("[gate]\nmin_average_confidence = 2.0\n");
        match Config::load_from(file.path()) {
            Err(CliError::Config(message)) => assert!(message.starts_with("[gate]")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_discovery_section_is_a_config_error() {
        let file = write_config("[discovery]\nsource_set_max_age_hours = 9223372036854775807\n");
        match Config::load_from(file.path()) {
            Err(CliError::Config(message)) => assert!(message.starts_with("[discovery]")),
            other => panic!("Expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_config("[gate\n");
        assert!(matches!(Config::load_from(file.path()), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = Config::load_from(Path::new("/nonexistent/qualifai/config.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}

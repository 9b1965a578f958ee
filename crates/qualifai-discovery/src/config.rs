//! Configuration for discovery

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::DiscoveryError;
use qualifai_domain::UrlProvenance;

const DEFAULT_MAX_AGE_HOURS: i64 = 24;

/// Per-channel URL caps and evidence limits
///
/// # Examples
///
/// ```
/// use qualifai_discovery::DiscoveryConfig;
///
/// let config = DiscoveryConfig::default();
/// assert_eq!(config.sitemap_cap, 25);
/// assert_eq!(config.max_evidence, 36);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Maximum URLs taken from the sitemap channel
    /// Default: 25
    pub sitemap_cap: usize,

    /// Maximum URLs taken from search-engine results
    /// Default: 15 (5 review, 5 job, 5 mention results)
    pub serp_cap: usize,

    /// Maximum guessed default paths
    /// Default: 20, leaving headroom over the built-in path table
    pub default_cap: usize,

    /// Maximum evidence items kept after deduplication
    /// Default: 36
    pub max_evidence: usize,

    /// Number of UTF-16 code units of the lowercased snippet that take part
    /// in the dedup key
    /// Default: 140
    pub snippet_key_chars: usize,

    /// How long a cached source set may be reused (hours)
    /// Default: 24
    pub source_set_max_age_hours: i64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            sitemap_cap: 25,
            serp_cap: 15,
            default_cap: 20,
            max_evidence: 36,
            snippet_key_chars: 140,
            source_set_max_age_hours: DEFAULT_MAX_AGE_HOURS,
        }
    }
}

impl DiscoveryConfig {
    /// Thorough preset: larger caps for prospects with big sites
    pub fn thorough() -> Self {
        Self {
            sitemap_cap: 50,
            serp_cap: 30,
            default_cap: 20,
            max_evidence: 72,
            snippet_key_chars: 140,
            source_set_max_age_hours: 24,
        }
    }

    /// Minimal preset: small caps for cheap smoke runs
    pub fn minimal() -> Self {
        Self {
            sitemap_cap: 5,
            serp_cap: 5,
            default_cap: 5,
            max_evidence: 12,
            snippet_key_chars: 140,
            source_set_max_age_hours: 6,
        }
    }

    /// Cap for the given channel
    pub fn cap_for(&self, provenance: UrlProvenance) -> usize {
        match provenance {
            UrlProvenance::Sitemap => self.sitemap_cap,
            UrlProvenance::Serp => self.serp_cap,
            UrlProvenance::Default => self.default_cap,
        }
    }

    /// Freshness window for cached source sets
    ///
    /// Falls back to 24 hours when the configured value is not a usable
    /// duration.
    pub fn source_set_max_age(&self) -> Duration {
        Duration::try_hours(self.source_set_max_age_hours)
            .filter(|max_age| *max_age > Duration::zero())
            .unwrap_or_else(|| Duration::hours(DEFAULT_MAX_AGE_HOURS))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DiscoveryError> {
        if self.max_evidence == 0 {
            return Err(DiscoveryError::Config(
                "max_evidence must be greater than 0".to_string(),
            ));
        }
        if self.snippet_key_chars == 0 {
            return Err(DiscoveryError::Config(
                "snippet_key_chars must be greater than 0".to_string(),
            ));
        }
        if self.source_set_max_age_hours <= 0 {
            return Err(DiscoveryError::Config(
                "source_set_max_age_hours must be greater than 0".to_string(),
            ));
        }
        if Duration::try_hours(self.source_set_max_age_hours).is_none() {
            return Err(DiscoveryError::Config(format!(
                "source_set_max_age_hours {} is too large",
                self.source_set_max_age_hours
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, DiscoveryError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, DiscoveryError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

//! Gatekeeper configuration

use serde::{Deserialize, Serialize};

use crate::GatekeeperError;

/// Thresholds for the quality gate, pain confirmation and traffic light
///
/// The traffic light reuses the gate's volume, diversity and confidence
/// thresholds, so a gate that fails on volume always maps to red.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Minimum evidence items, counting synthetic ones
    pub min_evidence_count: usize,

    /// Minimum distinct source types, counting synthetic ones
    pub min_source_types: usize,

    /// Minimum average confidence (after rounding to 2 decimals)
    pub min_average_confidence: f64,

    /// Confidence an item needs to count as observed evidence
    pub observed_min_confidence: f64,

    /// Minimum observed items for pain confirmation
    pub pain_min_observed: usize,

    /// Minimum observed site-context items
    pub pain_min_context_sources: usize,

    /// Require at least one observed review or job item
    pub require_external_pain_source: bool,

    /// Minimum distinct pain tags among observed items
    pub pain_min_distinct_tags: usize,

    /// Distinct source types a pain tag needs to count as confirmed (advisory)
    pub tag_confirmation_min_sources: usize,

    /// Minimum trimmed length of a reviewer's override notes
    pub override_min_notes_len: usize,

    /// Block asset generation on a failed gate unless overridden
    pub strict_gate: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_evidence_count: 3,
            min_source_types: 2,
            min_average_confidence: 0.65,
            observed_min_confidence: 0.62,
            pain_min_observed: 3,
            pain_min_context_sources: 1,
            require_external_pain_source: true,
            pain_min_distinct_tags: 2,
            tag_confirmation_min_sources: 2,
            override_min_notes_len: 12,
            strict_gate: true,
        }
    }
}

impl GateConfig {
    /// Stricter thresholds for campaigns where a bad email is expensive
    pub fn strict() -> Self {
        Self {
            min_evidence_count: 5,
            min_source_types: 3,
            min_average_confidence: 0.7,
            observed_min_confidence: 0.65,
            pain_min_observed: 4,
            pain_min_context_sources: 1,
            require_external_pain_source: true,
            pain_min_distinct_tags: 2,
            tag_confirmation_min_sources: 2,
            override_min_notes_len: 20,
            strict_gate: true,
        }
    }

    /// Loose thresholds for smoke runs and demos
    pub fn permissive() -> Self {
        Self {
            min_evidence_count: 1,
            min_source_types: 1,
            min_average_confidence: 0.5,
            observed_min_confidence: 0.5,
            pain_min_observed: 1,
            pain_min_context_sources: 0,
            require_external_pain_source: false,
            pain_min_distinct_tags: 1,
            tag_confirmation_min_sources: 2,
            override_min_notes_len: 12,
            strict_gate: false,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        for (name, value) in [
            ("min_average_confidence", self.min_average_confidence),
            ("observed_min_confidence", self.observed_min_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GatekeeperError::Config(format!(
                    "{} must be within [0.0, 1.0], got {}",
                    name, value
                )));
            }
        }
        if self.min_evidence_count == 0 {
            return Err(GatekeeperError::Config(
                "min_evidence_count must be greater than 0".to_string(),
            ));
        }
        if self.override_min_notes_len == 0 {
            return Err(GatekeeperError::Config(
                "override_min_notes_len must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, GatekeeperError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, GatekeeperError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GateConfig::default();
        assert_eq!(config.min_evidence_count, 3);
        assert_eq!(config.min_source_types, 2);
        assert_eq!(config.min_average_confidence, 0.65);
        assert_eq!(config.observed_min_confidence, 0.62);
        assert_eq!(config.pain_min_distinct_tags, 2);
        assert_eq!(config.override_min_notes_len, 12);
        assert!(config.strict_gate);
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(GateConfig::default().validate().is_ok());
        assert!(GateConfig::strict().validate().is_ok());
        assert!(GateConfig::permissive().validate().is_ok());
    }

    #[test]
    fn test_strict_is_stricter() {
        let strict = GateConfig::strict();
        let default = GateConfig::default();
        assert!(strict.min_evidence_count > default.min_evidence_count);
        assert!(strict.min_average_confidence > default.min_average_confidence);
    }

    #[test]
    fn test_out_of_range_confidence_rejected() {
        let mut config = GateConfig::default();
        config.min_average_confidence = 1.5;
        assert!(matches!(config.validate(), Err(GatekeeperError::Config(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GateConfig::from_toml("min_evidence_count = 4\nstrict_gate = false\n").unwrap();
        assert_eq!(config.min_evidence_count, 4);
        assert!(!config.strict_gate);
        assert_eq!(config.min_source_types, 2);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = GateConfig::strict();
        let parsed = GateConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}

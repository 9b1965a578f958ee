//! Quality gate evaluation

use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::{debug, info};

use qualifai_domain::confidence::{mean, round2};
use qualifai_domain::{EvidenceItem, TrafficLight};

use crate::classify::{classify_evidence, EvidenceOrigin};
use crate::pain::{confirm_pain, plural, PainConfirmationResult, PainReason};
use crate::tags::confirm_pain_tags;
use crate::traffic_light::classify_traffic_light;
use crate::{GateConfig, Taxonomy};

/// A failed quality gate check
#[derive(Debug, Clone, PartialEq)]
pub enum GateReason {
    /// Too few evidence items overall
    MinimumEvidence {
        /// Minimum item count
        required: usize,
    },

    /// Too few distinct source types overall
    MinimumSourceTypes {
        /// Minimum distinct source types
        required: usize,
    },

    /// Rounded average confidence below the threshold
    MinimumAverageConfidence {
        /// Minimum average confidence
        required: f64,
    },

    /// A pain confirmation check failed
    Pain(PainReason),
}

impl fmt::Display for GateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateReason::MinimumEvidence { required } => write!(
                f,
                "Minimum {} evidence {} required",
                required,
                plural(*required, "item", "items")
            ),
            GateReason::MinimumSourceTypes { required } => write!(
                f,
                "At least {} evidence source {} required",
                required,
                plural(*required, "type", "types")
            ),
            GateReason::MinimumAverageConfidence { required } => {
                write!(f, "Average confidence must be >= {}", required)
            }
            GateReason::Pain(reason) => fmt::Display::fmt(reason, f),
        }
    }
}

impl Serialize for GateReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of a quality gate evaluation
///
/// Serialized with the camelCase keys a run summary persists under `gate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityGateResult {
    /// True only when no check failed
    pub passed: bool,

    /// Mean confidence over all items, rounded to 2 decimals
    pub average_confidence: f64,

    /// Distinct source types over all items
    pub source_type_count: usize,

    /// All items, synthetic ones included
    pub evidence_count: usize,

    /// Failed checks: volume, diversity, confidence, then pain reasons
    pub reasons: Vec<GateReason>,

    /// Pain confirmation over the observed subset
    pub pain_confirmation: PainConfirmationResult,

    /// Pain tags backed by several source types (advisory)
    pub confirmed_pain_tags: Vec<String>,

    /// Pain tags seen in too few source types (advisory)
    pub unconfirmed_pain_tags: Vec<String>,
}

impl QualityGateResult {
    /// Reasons rendered as messages
    pub fn reason_messages(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}

/// The Gatekeeper admits or blocks a research run based on its evidence
#[derive(Debug, Clone)]
pub struct Gatekeeper {
    config: GateConfig,
    taxonomy: Taxonomy,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given thresholds and the default taxonomy
    pub fn new(config: GateConfig) -> Self {
        Self::with_taxonomy(config, Taxonomy::default())
    }

    /// Create a Gatekeeper with explicit classification tables
    pub fn with_taxonomy(config: GateConfig, taxonomy: Taxonomy) -> Self {
        Self { config, taxonomy }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(GateConfig::default())
    }

    /// Thresholds in use
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Classification tables in use
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Whether one item counts as observed evidence, and if not, why
    pub fn classify(&self, item: &EvidenceItem) -> EvidenceOrigin {
        classify_evidence(item, &self.taxonomy, self.config.observed_min_confidence)
    }

    /// Pain confirmation on its own
    pub fn pain_confirmation(&self, items: &[EvidenceItem]) -> PainConfirmationResult {
        confirm_pain(items, &self.config, &self.taxonomy)
    }

    /// Evaluate the gate over a run's evidence
    ///
    /// Volume, diversity and confidence count every item, synthetic ones
    /// included; pain confirmation counts observed items only.
    pub fn evaluate(&self, items: &[EvidenceItem]) -> QualityGateResult {
        let evidence_count = items.len();
        let source_type_count = items
            .iter()
            .map(|item| item.source_type)
            .collect::<HashSet<_>>()
            .len();
        let scores: Vec<f64> = items.iter().map(|item| item.confidence_score).collect();
        let average_confidence = round2(mean(&scores));

        let pain_confirmation = self.pain_confirmation(items);
        let tags = confirm_pain_tags(items, &self.taxonomy, self.config.tag_confirmation_min_sources);

        let mut reasons = Vec::new();
        if evidence_count < self.config.min_evidence_count {
            reasons.push(GateReason::MinimumEvidence {
                required: self.config.min_evidence_count,
            });
        }
        if source_type_count < self.config.min_source_types {
            reasons.push(GateReason::MinimumSourceTypes {
                required: self.config.min_source_types,
            });
        }
        if average_confidence < self.config.min_average_confidence {
            reasons.push(GateReason::MinimumAverageConfidence {
                required: self.config.min_average_confidence,
            });
        }
        reasons.extend(pain_confirmation.reasons.iter().cloned().map(GateReason::Pain));

        let passed = reasons.is_empty();
        debug!(
            confirmed_tags = tags.confirmed_pain_tags.len(),
            unconfirmed_tags = tags.unconfirmed_pain_tags.len(),
            "Cross-checked pain tags"
        );
        info!(
            passed,
            evidence_count,
            source_type_count,
            average_confidence,
            reasons = reasons.len(),
            "Evaluated quality gate"
        );

        QualityGateResult {
            passed,
            average_confidence,
            source_type_count,
            evidence_count,
            reasons,
            pain_confirmation,
            confirmed_pain_tags: tags.confirmed_pain_tags,
            unconfirmed_pain_tags: tags.unconfirmed_pain_tags,
        }
    }

    /// Traffic light for the aggregate numbers of a gate result
    pub fn traffic_light(&self, result: &QualityGateResult) -> TrafficLight {
        classify_traffic_light(
            result.evidence_count,
            result.source_type_count,
            result.average_confidence,
            &self.config,
        )
    }
}

impl Default for Gatekeeper {
    fn default() -> Self {
        Self::default_config()
    }
}

/// Evaluate the gate with the default thresholds and taxonomy
pub fn evaluate_quality_gate(items: &[EvidenceItem]) -> QualityGateResult {
    Gatekeeper::default_config().evaluate(items)
}

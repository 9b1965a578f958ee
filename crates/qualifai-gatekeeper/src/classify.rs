//! Observed versus synthetic evidence

use qualifai_domain::EvidenceItem;

use crate::Taxonomy;

/// Why an item does not count as observed evidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntheticCause {
    /// No adapter recorded in the metadata
    MissingAdapter,
    /// Produced by a template-based adapter
    SyntheticAdapter,
    /// The adapter fell back to templated text
    Fallback,
    /// Confidence below the observed threshold
    LowConfidence,
}

/// Whether an item is a real signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvidenceOrigin {
    /// Extracted from real content with enough confidence
    Observed,
    /// Templated filler or too weak to trust
    Synthetic(SyntheticCause),
}

impl EvidenceOrigin {
    /// Whether the item counts toward pain confirmation
    pub fn is_observed(&self) -> bool {
        matches!(self, EvidenceOrigin::Observed)
    }
}

/// Classify one item
///
/// Observed requires a named, non-synthetic adapter, no fallback flag, and a
/// confidence of at least `min_confidence`.
pub fn classify_evidence(
    item: &EvidenceItem,
    taxonomy: &Taxonomy,
    min_confidence: f64,
) -> EvidenceOrigin {
    use EvidenceOrigin::{Observed, Synthetic};

    match item.metadata.adapter.as_deref() {
        None | Some("") => Synthetic(SyntheticCause::MissingAdapter),
        Some(adapter) if taxonomy.is_synthetic_adapter(adapter) => {
            Synthetic(SyntheticCause::SyntheticAdapter)
        }
        Some(_) if item.metadata.fallback => Synthetic(SyntheticCause::Fallback),
        Some(_) if item.confidence_score < min_confidence => {
            Synthetic(SyntheticCause::LowConfidence)
        }
        Some(_) => Observed,
    }
}

//! Pain confirmation over observed evidence
//!
//! Volume alone can be gamed by many weak or repeated signals. A pain counts
//! as confirmed when observed evidence covers site context, an external
//! source (reviews or jobs), and more than one workflow.

use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::debug;

use qualifai_domain::EvidenceItem;

use crate::classify::classify_evidence;
use crate::taxonomy::SourceCategory;
use crate::{GateConfig, Taxonomy};

/// A failed pain-confirmation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PainReason {
    /// Too few observed items
    ObservedEvidence {
        /// Minimum observed items
        required: usize,
    },
    /// Too few observed site-context items
    SiteContext {
        /// Minimum context items
        required: usize,
    },
    /// No observed review or job item
    ExternalPainSource,
    /// Too few distinct pain tags
    WorkflowTags {
        /// Minimum distinct pain tags
        required: usize,
    },
}

impl fmt::Display for PainReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PainReason::ObservedEvidence { required } => write!(
                f,
                "At least {} confirmed evidence {} required",
                required,
                plural(*required, "item", "items")
            ),
            PainReason::SiteContext { required } => write!(
                f,
                "At least {} confirmed site-context {} required",
                required,
                plural(*required, "source", "sources")
            ),
            PainReason::ExternalPainSource => f.write_str(
                "At least 1 confirmed external pain source required (reviews or jobs)",
            ),
            PainReason::WorkflowTags { required } => write!(
                f,
                "Pain confirmation needs at least {} workflow {}",
                required,
                plural(*required, "tag", "tags")
            ),
        }
    }
}

impl Serialize for PainReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub(crate) fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 {
        one
    } else {
        many
    }
}

/// Counts over the observed subset and the checks it failed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PainConfirmationResult {
    /// Items that passed observed classification
    pub observed_evidence_count: usize,
    /// Observed review items
    pub reviews_count: usize,
    /// Observed job items
    pub jobs_count: usize,
    /// Observed site-context items
    pub context_count: usize,
    /// Distinct pain tags among observed items
    pub distinct_pain_tags: usize,
    /// Failed checks, in fixed order
    pub reasons: Vec<PainReason>,
}

impl PainConfirmationResult {
    /// Whether every pain check passed
    pub fn confirmed(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Evaluate pain confirmation with explicit thresholds and tables
pub fn confirm_pain(
    items: &[EvidenceItem],
    config: &GateConfig,
    taxonomy: &Taxonomy,
) -> PainConfirmationResult {
    let observed: Vec<&EvidenceItem> = items
        .iter()
        .filter(|item| classify_evidence(item, taxonomy, config.observed_min_confidence).is_observed())
        .collect();

    let mut result = PainConfirmationResult {
        observed_evidence_count: observed.len(),
        ..PainConfirmationResult::default()
    };
    let mut pain_tags = HashSet::new();

    for item in &observed {
        match taxonomy.category_of(item.source_type) {
            SourceCategory::Reviews => result.reviews_count += 1,
            SourceCategory::Jobs => result.jobs_count += 1,
            SourceCategory::Context => result.context_count += 1,
            SourceCategory::Uncategorized => {}
        }
        if taxonomy.is_pain_tag(&item.workflow_tag) {
            pain_tags.insert(item.workflow_tag.as_str());
        }
    }
    result.distinct_pain_tags = pain_tags.len();

    if result.observed_evidence_count < config.pain_min_observed {
        result.reasons.push(PainReason::ObservedEvidence {
            required: config.pain_min_observed,
        });
    }
    if result.context_count < config.pain_min_context_sources {
        result.reasons.push(PainReason::SiteContext {
            required: config.pain_min_context_sources,
        });
    }
    if config.require_external_pain_source && result.reviews_count == 0 && result.jobs_count == 0 {
        result.reasons.push(PainReason::ExternalPainSource);
    }
    if result.distinct_pain_tags < config.pain_min_distinct_tags {
        result.reasons.push(PainReason::WorkflowTags {
            required: config.pain_min_distinct_tags,
        });
    }

    debug!(
        total = items.len(),
        observed = result.observed_evidence_count,
        reviews = result.reviews_count,
        jobs = result.jobs_count,
        context = result.context_count,
        pain_tags = result.distinct_pain_tags,
        "Evaluated pain confirmation"
    );

    result
}

/// Evaluate pain confirmation with the default thresholds and tables
pub fn evaluate_pain_confirmation(items: &[EvidenceItem]) -> PainConfirmationResult {
    confirm_pain(items, &GateConfig::default(), &Taxonomy::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qualifai_domain::{EvidenceMetadata, SourceType};

    fn observed(source_type: SourceType, tag: &str) -> EvidenceItem {
        EvidenceItem::new(
            source_type,
            "https://example.nl",
            tag,
            0.8,
            EvidenceMetadata::from_adapter("crawl4ai"),
        )
    }

    fn messages(result: &PainConfirmationResult) -> Vec<String> {
        result.reasons.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_evidence_fails_every_check() {
        let result = evaluate_pain_confirmation(&[]);
        assert_eq!(
            messages(&result),
            vec![
                "At least 3 confirmed evidence items required",
                "At least 1 confirmed site-context source required",
                "At least 1 confirmed external pain source required (reviews or jobs)",
                "Pain confirmation needs at least 2 workflow tags",
            ]
        );
    }

    #[test]
    fn test_confirmed_pain() {
        let items = vec![
            observed(SourceType::Reviews, "planning"),
            observed(SourceType::Careers, "handoff"),
            observed(SourceType::Website, "workflow-context"),
        ];
        let result = evaluate_pain_confirmation(&items);

        assert!(result.confirmed());
        assert_eq!(result.observed_evidence_count, 3);
        assert_eq!(result.reviews_count, 1);
        assert_eq!(result.jobs_count, 1);
        assert_eq!(result.context_count, 1);
        assert_eq!(result.distinct_pain_tags, 2);
    }

    #[test]
    fn test_synthetic_items_are_ignored() {
        let mut items = vec![
            observed(SourceType::Reviews, "planning"),
            observed(SourceType::Website, "billing"),
        ];
        items.push(EvidenceItem::new(
            SourceType::JobBoard,
            "https://example.nl/vacatures",
            "handoff",
            0.9,
            EvidenceMetadata::from_adapter("manual"),
        ));
        items.push(EvidenceItem::new(
            SourceType::Careers,
            "https://example.nl/werken-bij",
            "lead-intake",
            0.9,
            EvidenceMetadata::from_adapter("crawl4ai").with_fallback(),
        ));

        let result = evaluate_pain_confirmation(&items);
        assert_eq!(result.observed_evidence_count, 2);
        assert_eq!(result.jobs_count, 0);
        assert_eq!(messages(&result), vec!["At least 3 confirmed evidence items required"]);
    }

    #[test]
    fn test_jobs_alone_satisfy_external_source() {
        let items = vec![
            observed(SourceType::JobBoard, "planning"),
            observed(SourceType::Docs, "billing"),
            observed(SourceType::HelpCenter, "billing"),
        ];
        assert!(evaluate_pain_confirmation(&items).confirmed());
    }

    #[test]
    fn test_repeated_tag_counts_once() {
        let items = vec![
            observed(SourceType::Reviews, "planning"),
            observed(SourceType::Reviews, "planning"),
            observed(SourceType::Website, "planning"),
        ];
        let result = evaluate_pain_confirmation(&items);
        assert_eq!(result.distinct_pain_tags, 1);
        assert_eq!(messages(&result), vec!["Pain confirmation needs at least 2 workflow tags"]);
    }

    #[test]
    fn test_manual_url_is_uncategorized() {
        let items = vec![
            observed(SourceType::ManualUrl, "planning"),
            observed(SourceType::ManualUrl, "billing"),
            observed(SourceType::ManualUrl, "handoff"),
        ];
        let result = evaluate_pain_confirmation(&items);
        assert_eq!(result.context_count, 0);
        assert_eq!(result.reviews_count + result.jobs_count, 0);
        assert_eq!(result.reasons.len(), 2);
    }

    #[test]
    fn test_singular_reason_wording() {
        assert_eq!(
            PainReason::WorkflowTags { required: 1 }.to_string(),
            "Pain confirmation needs at least 1 workflow tag"
        );
        assert_eq!(
            PainReason::SiteContext { required: 2 }.to_string(),
            "At least 2 confirmed site-context sources required"
        );
    }

    #[test]
    fn test_permissive_config_drops_external_requirement() {
        let items = vec![observed(SourceType::Website, "planning")];
        let result = confirm_pain(&items, &GateConfig::permissive(), &Taxonomy::default());
        assert!(result.confirmed());
    }

    #[test]
    fn test_reasons_serialize_as_messages() {
        let json = serde_json::to_value(evaluate_pain_confirmation(&[])).unwrap();
        assert_eq!(json["reasons"][3], "Pain confirmation needs at least 2 workflow tags");
        assert_eq!(json["observedEvidenceCount"], 0);
    }
}

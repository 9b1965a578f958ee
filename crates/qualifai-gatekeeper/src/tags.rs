//! Cross-source confirmation of pain tags (advisory only)

use std::collections::BTreeSet;

use serde::Serialize;

use qualifai_domain::{EvidenceItem, SourceType};

use crate::Taxonomy;

/// Pain tags split by how many distinct source types back them
///
/// Never affects whether the gate passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PainTagConfirmation {
    /// Tags backed by at least the configured number of source types
    pub confirmed_pain_tags: Vec<String>,
    /// Tags seen in fewer source types
    pub unconfirmed_pain_tags: Vec<String>,
}

/// Group non-placeholder pain-tag items by tag and count their source types
///
/// Placeholders (fallback or not-found items) are skipped; weak but real
/// items still count. Tags keep first-seen order.
pub fn confirm_pain_tags(
    items: &[EvidenceItem],
    taxonomy: &Taxonomy,
    min_sources: usize,
) -> PainTagConfirmation {
    let mut by_tag: Vec<(&str, BTreeSet<SourceType>)> = Vec::new();

    for item in items {
        if item.metadata.is_placeholder() || !taxonomy.is_pain_tag(&item.workflow_tag) {
            continue;
        }
        match by_tag.iter_mut().find(|(tag, _)| *tag == item.workflow_tag) {
            Some((_, sources)) => {
                sources.insert(item.source_type);
            }
            None => by_tag.push((item.workflow_tag.as_str(), BTreeSet::from([item.source_type]))),
        }
    }

    let mut result = PainTagConfirmation::default();
    for (tag, sources) in by_tag {
        if sources.len() >= min_sources {
            result.confirmed_pain_tags.push(tag.to_string());
        } else {
            result.unconfirmed_pain_tags.push(tag.to_string());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use qualifai_domain::EvidenceMetadata;

    fn item(source_type: SourceType, tag: &str, metadata: EvidenceMetadata) -> EvidenceItem {
        EvidenceItem::new(source_type, "https://example.nl", tag, 0.5, metadata)
    }

    #[test]
    fn test_tag_backed_by_two_source_types_is_confirmed() {
        let adapter = EvidenceMetadata::from_adapter("crawl4ai");
        let items = vec![
            item(SourceType::Reviews, "planning", adapter.clone()),
            item(SourceType::Website, "planning", adapter.clone()),
            item(SourceType::Website, "billing", adapter.clone()),
            item(SourceType::Website, "billing", adapter),
        ];
        let result = confirm_pain_tags(&items, &Taxonomy::default(), 2);
        assert_eq!(result.confirmed_pain_tags, vec!["planning"]);
        assert_eq!(result.unconfirmed_pain_tags, vec!["billing"]);
    }

    #[test]
    fn test_placeholders_and_non_pain_tags_skipped() {
        let items = vec![
            item(SourceType::Reviews, "handoff", EvidenceMetadata::from_adapter("x").with_fallback()),
            item(SourceType::Website, "handoff", EvidenceMetadata::default().with_not_found()),
            item(SourceType::Website, "workflow-context", EvidenceMetadata::from_adapter("x")),
            item(SourceType::Docs, "workflow-context", EvidenceMetadata::from_adapter("x")),
        ];
        assert_eq!(confirm_pain_tags(&items, &Taxonomy::default(), 2), PainTagConfirmation::default());
    }

    #[test]
    fn test_synthetic_but_real_items_still_count() {
        let items = vec![
            item(SourceType::Reviews, "billing", EvidenceMetadata::from_adapter("reviews-first")),
            item(SourceType::JobBoard, "billing", EvidenceMetadata::default()),
        ];
        let result = confirm_pain_tags(&items, &Taxonomy::default(), 2);
        assert_eq!(result.confirmed_pain_tags, vec!["billing"]);
    }

    #[test]
    fn test_first_seen_order() {
        let adapter = EvidenceMetadata::from_adapter("crawl4ai");
        let items = vec![
            item(SourceType::Website, "lead-intake", adapter.clone()),
            item(SourceType::Website, "billing", adapter.clone()),
            item(SourceType::Website, "handoff", adapter),
        ];
        let result = confirm_pain_tags(&items, &Taxonomy::default(), 2);
        assert_eq!(result.unconfirmed_pain_tags, vec!["lead-intake", "billing", "handoff"]);
    }
}

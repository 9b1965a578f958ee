//! Collapsing near-identical evidence drafts from multiple adapters

use std::collections::HashSet;

use tracing::debug;

use crate::DiscoveryConfig;
use qualifai_domain::EvidenceKey;

/// Deduplicates evidence drafts and bounds the result
///
/// Drafts are keyed on source URL, workflow tag and the start of the
/// lowercased snippet. The first occurrence wins and order is preserved;
/// anything past the cap is dropped, so adapters that push earlier in the
/// pipeline take priority.
#[derive(Debug, Clone)]
pub struct EvidenceDeduplicator {
    max_evidence: usize,
    snippet_key_chars: usize,
}

impl Default for EvidenceDeduplicator {
    fn default() -> Self {
        Self::from_config(&DiscoveryConfig::default())
    }
}

impl EvidenceDeduplicator {
    /// Create a deduplicator with an explicit cap and snippet key length
    pub fn new(max_evidence: usize, snippet_key_chars: usize) -> Self {
        Self {
            max_evidence,
            snippet_key_chars,
        }
    }

    /// Create a deduplicator from discovery configuration
    pub fn from_config(config: &DiscoveryConfig) -> Self {
        Self::new(config.max_evidence, config.snippet_key_chars)
    }

    /// The identity key of a draft
    ///
    /// The snippet prefix is measured in UTF-16 code units, matching keys
    /// written by the browser-side pipeline. A character that would straddle
    /// the limit is left out.
    pub fn key_for<T: EvidenceKey>(&self, draft: &T) -> String {
        let mut units = 0;
        let snippet: String = draft
            .snippet()
            .to_lowercase()
            .chars()
            .take_while(|c| {
                units += c.len_utf16();
                units <= self.snippet_key_chars
            })
            .collect();
        format!("{}|{}|{}", draft.source_url(), draft.workflow_tag(), snippet)
    }

    /// Deduplicate then truncate to the cap
    pub fn dedupe<T: EvidenceKey>(&self, drafts: Vec<T>) -> Vec<T> {
        let total = drafts.len();
        let mut seen = HashSet::with_capacity(total);
        let mut unique: Vec<T> = drafts
            .into_iter()
            .filter(|draft| seen.insert(self.key_for(draft)))
            .collect();

        let duplicates = total - unique.len();
        let over_cap = unique.len().saturating_sub(self.max_evidence);
        unique.truncate(self.max_evidence);

        debug!(
            total,
            duplicates,
            dropped_over_cap = over_cap,
            kept = unique.len(),
            "Deduplicated evidence drafts"
        );

        unique
    }
}

/// Deduplicate drafts with the default cap of 36
pub fn dedupe_evidence<T: EvidenceKey>(drafts: Vec<T>) -> Vec<T> {
    EvidenceDeduplicator::default().dedupe(drafts)
}

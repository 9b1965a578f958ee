//! Trait definitions shared across layers

use crate::EvidenceItem;

/// The fields that decide whether two evidence drafts are the same finding
///
/// Implemented by [`EvidenceItem`] and by whatever draft type an ingestion
/// pipeline carries before items are persisted.
pub trait EvidenceKey {
    /// Page the evidence was taken from
    fn source_url(&self) -> &str;

    /// Business-process category
    fn workflow_tag(&self) -> &str;

    /// Extracted text
    fn snippet(&self) -> &str;
}

impl EvidenceKey for EvidenceItem {
    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn workflow_tag(&self) -> &str {
        &self.workflow_tag
    }

    fn snippet(&self) -> &str {
        &self.snippet
    }
}

//! Adapter, tag and source-type tables the gate classifies against

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use qualifai_domain::SourceType;

/// What a source type contributes to pain confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceCategory {
    /// Review platforms: customers describing the pain
    Reviews,
    /// Job listings: hiring for the pain
    Jobs,
    /// The prospect's own site and registries: how they work
    Context,
    /// Counts toward volume and diversity only
    Uncategorized,
}

/// Classification tables, injected so the taxonomy can evolve without code changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Taxonomy {
    /// Adapters that emit templated content rather than observed text
    pub synthetic_adapters: BTreeSet<String>,

    /// Workflow tags that name a pain
    pub pain_tags: BTreeSet<String>,

    /// Source types counted as reviews
    pub review_source_types: Vec<SourceType>,

    /// Source types counted as job listings
    pub job_source_types: Vec<SourceType>,

    /// Source types counted as site context
    pub context_source_types: Vec<SourceType>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            synthetic_adapters: ["manual", "reviews-first", "apollo-derived"]
                .into_iter()
                .map(String::from)
                .collect(),
            pain_tags: ["planning", "handoff", "billing", "lead-intake", "field-reporting"]
                .into_iter()
                .map(String::from)
                .collect(),
            review_source_types: vec![SourceType::Reviews],
            job_source_types: vec![SourceType::Careers, SourceType::JobBoard],
            context_source_types: vec![
                SourceType::Website,
                SourceType::Docs,
                SourceType::HelpCenter,
                SourceType::Registry,
            ],
        }
    }
}

impl Taxonomy {
    /// Whether the adapter fabricates content
    pub fn is_synthetic_adapter(&self, adapter: &str) -> bool {
        self.synthetic_adapters.contains(adapter)
    }

    /// Whether the workflow tag names a pain
    pub fn is_pain_tag(&self, tag: &str) -> bool {
        self.pain_tags.contains(tag)
    }

    /// Category of a source type; reviews take precedence, then jobs, then context
    pub fn category_of(&self, source_type: SourceType) -> SourceCategory {
        if self.review_source_types.contains(&source_type) {
            SourceCategory::Reviews
        } else if self.job_source_types.contains(&source_type) {
            SourceCategory::Jobs
        } else if self.context_source_types.contains(&source_type) {
            SourceCategory::Context
        } else {
            SourceCategory::Uncategorized
        }
    }
}

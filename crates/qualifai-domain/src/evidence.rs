//! Evidence module - the raw material the quality gate scores

use std::fmt;

use crate::confidence::is_valid_confidence;
use crate::SourceType;

/// Opaque identifier for an evidence item
///
/// Identifiers assigned by the persistence layer are kept verbatim. Freshly
/// generated identifiers are UUIDv7 strings so they sort chronologically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EvidenceId(String);

impl EvidenceId {
    /// Generate a new UUIDv7-based identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use qualifai_domain::EvidenceId;
    ///
    /// let id = EvidenceId::new();
    /// assert_eq!(id.as_str().len(), 36);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Wrap an identifier issued elsewhere
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EvidenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the ingestion adapter recorded about how an item was produced
///
/// Upstream this is an open JSON bag; only the fields the gate reads are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct EvidenceMetadata {
    /// Name of the adapter that produced the item, when it recorded one
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub adapter: Option<String>,

    /// Set when the adapter emitted templated text because it found nothing
    pub fallback: bool,

    /// Set when the adapter looked for the source and it did not exist
    pub not_found: bool,
}

impl EvidenceMetadata {
    /// Metadata for an item produced by the named adapter
    pub fn from_adapter(adapter: impl Into<String>) -> Self {
        Self {
            adapter: Some(adapter.into()),
            ..Self::default()
        }
    }

    /// Mark the item as templated fallback content
    pub fn with_fallback(mut self) -> Self {
        self.fallback = true;
        self
    }

    /// Mark the item as a not-found placeholder
    pub fn with_not_found(mut self) -> Self {
        self.not_found = true;
        self
    }

    /// Placeholders carry no signal at all: fallback text or a missing source
    pub fn is_placeholder(&self) -> bool {
        self.fallback || self.not_found
    }
}

/// A single piece of evidence about a prospect's workflow
///
/// Evidence is never mutated once scored; the gate only reads it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EvidenceItem {
    /// Identifier
    pub id: EvidenceId,

    /// Channel the evidence came from
    pub source_type: SourceType,

    /// Page the evidence was taken from
    pub source_url: String,

    /// Optional page or item title
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub title: Option<String>,

    /// Extracted text
    #[cfg_attr(feature = "serde", serde(default))]
    pub snippet: String,

    /// Business-process category, e.g. "planning" or "billing"
    pub workflow_tag: String,

    /// Confidence in [0.0, 1.0]
    pub confidence_score: f64,

    /// Adapter bookkeeping
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: EvidenceMetadata,
}

impl EvidenceItem {
    /// Create a new evidence item with a generated identifier and empty text
    pub fn new(
        source_type: SourceType,
        source_url: impl Into<String>,
        workflow_tag: impl Into<String>,
        confidence_score: f64,
        metadata: EvidenceMetadata,
    ) -> Self {
        Self {
            id: EvidenceId::new(),
            source_type,
            source_url: source_url.into(),
            title: None,
            snippet: String::new(),
            workflow_tag: workflow_tag.into(),
            confidence_score,
            metadata,
        }
    }

    /// Attach the extracted text
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = snippet.into();
        self
    }

    /// Attach a title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether the confidence score respects the [0.0, 1.0] invariant
    pub fn has_valid_confidence(&self) -> bool {
        is_valid_confidence(self.confidence_score)
    }
}

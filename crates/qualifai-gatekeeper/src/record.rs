//! Evidence records as persisted by the research pipeline
//!
//! Records arrive as JSON with an open metadata object. Metadata is read
//! leniently; source type and confidence are checked strictly because the
//! gate's arithmetic depends on them.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use qualifai_domain::confidence::is_valid_confidence;
use qualifai_domain::{EvidenceId, EvidenceItem, EvidenceMetadata, SourceType};

use crate::GatekeeperError;

/// One evidence record before validation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceRecord {
    /// Identifier, generated when absent
    #[serde(default)]
    pub id: Option<String>,
    /// Source type name, e.g. "REVIEWS"
    pub source_type: String,
    /// Page the evidence came from
    pub source_url: String,
    /// Optional title
    #[serde(default)]
    pub title: Option<String>,
    /// Extracted text
    #[serde(default)]
    pub snippet: Option<String>,
    /// Workflow tag
    pub workflow_tag: String,
    /// Confidence score
    pub confidence_score: f64,
    /// Open metadata object
    #[serde(default)]
    pub metadata: Value,
}

impl EvidenceRecord {
    /// Validate the record and convert it into an evidence item
    pub fn into_evidence(self) -> Result<EvidenceItem, GatekeeperError> {
        let source_type = SourceType::parse(&self.source_type).ok_or_else(|| {
            GatekeeperError::InvalidEvidence(format!("unknown source type '{}'", self.source_type))
        })?;
        if !is_valid_confidence(self.confidence_score) {
            return Err(GatekeeperError::InvalidEvidence(format!(
                "confidence {} for {} is outside [0.0, 1.0]",
                self.confidence_score, self.source_url
            )));
        }

        Ok(EvidenceItem {
            id: self.id.map(|id| EvidenceId::from_string(id)).unwrap_or_default(),
            source_type,
            source_url: self.source_url,
            title: self.title,
            snippet: self.snippet.unwrap_or_default(),
            workflow_tag: self.workflow_tag,
            confidence_score: self.confidence_score,
            metadata: parse_metadata(&self.metadata),
        })
    }
}

/// Read the fields the gate needs out of an open metadata object
///
/// `adapter` counts only when it is a string; `fallback` and `notFound` only
/// when they are literally `true`. Anything else is ignored.
pub fn parse_metadata(value: &Value) -> EvidenceMetadata {
    let flag = |key: &str| value.get(key).and_then(Value::as_bool) == Some(true);

    EvidenceMetadata {
        adapter: value.get("adapter").and_then(Value::as_str).map(String::from),
        fallback: flag("fallback"),
        not_found: flag("notFound"),
    }
}

/// Parse a JSON array of evidence records
///
/// The first invalid record fails the whole batch.
pub fn parse_evidence_records(json: &str) -> Result<Vec<EvidenceItem>, GatekeeperError> {
    let records: Vec<EvidenceRecord> = serde_json::from_str(json)?;
    let items = records
        .into_iter()
        .map(EvidenceRecord::into_evidence)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = items.len(), "Parsed evidence records");
    Ok(items)
}

//! Reading a persisted gate back out of a run summary
//!
//! Run summaries are written by other services and may predate fields, so
//! every field is optional here.

use serde_json::Value;
use tracing::warn;

use qualifai_domain::TrafficLight;

use crate::traffic_light::classify_traffic_light;
use crate::{GateConfig, QualityGateResult};

/// Key the gate is persisted under inside a run summary
pub const GATE_KEY: &str = "gate";

/// The aggregate view of a gate that later steps need
#[derive(Debug, Clone, PartialEq)]
pub struct GateSummary {
    /// Verdict, None when the summary carries no boolean `passed`
    pub passed: Option<bool>,
    /// Evidence count, 0 when missing
    pub evidence_count: usize,
    /// Distinct source types, 0 when missing
    pub source_type_count: usize,
    /// Average confidence, 0 when missing
    pub average_confidence: f64,
    /// Reason messages, empty when missing
    pub reasons: Vec<String>,
}

impl GateSummary {
    /// Read `summary.gate`; None when the summary carries no gate object
    pub fn from_run_summary(summary: &Value) -> Option<Self> {
        let gate = match summary.get(GATE_KEY) {
            Some(Value::Object(gate)) => gate,
            Some(Value::Null) | None => return None,
            Some(other) => {
                warn!(kind = json_kind(other), "Ignoring malformed gate in run summary");
                return None;
            }
        };

        let count = |key: &str| {
            gate.get(key)
                .and_then(Value::as_f64)
                .map(|n| n.max(0.0) as usize)
                .unwrap_or(0)
        };

        Some(Self {
            passed: gate.get("passed").and_then(Value::as_bool),
            evidence_count: count("evidenceCount"),
            source_type_count: count("sourceTypeCount"),
            average_confidence: gate
                .get("averageConfidence")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            reasons: gate
                .get("reasons")
                .and_then(Value::as_array)
                .map(|reasons| {
                    reasons
                        .iter()
                        .filter_map(Value::as_str)
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Summarize a freshly evaluated gate
    pub fn from_result(result: &QualityGateResult) -> Self {
        Self {
            passed: Some(result.passed),
            evidence_count: result.evidence_count,
            source_type_count: result.source_type_count,
            average_confidence: result.average_confidence,
            reasons: result.reason_messages(),
        }
    }

    /// Whether the persisted gate recorded a pass
    ///
    /// A missing verdict is not a pass.
    pub fn has_passed(&self) -> bool {
        self.passed == Some(true)
    }

    /// Traffic light for the persisted numbers
    pub fn traffic_light(&self, config: &GateConfig) -> TrafficLight {
        classify_traffic_light(
            self.evidence_count,
            self.source_type_count,
            self.average_confidence,
            config,
        )
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_complete_gate() {
        let summary = json!({
            "gate": {
                "passed": false,
                "evidenceCount": 4,
                "sourceTypeCount": 1,
                "averageConfidence": 0.71,
                "reasons": ["At least 2 evidence source types required"]
            }
        });
        let gate = GateSummary::from_run_summary(&summary).unwrap();
        assert_eq!(gate.passed, Some(false));
        assert!(!gate.has_passed());
        assert_eq!(gate.evidence_count, 4);
        assert_eq!(gate.reasons, vec!["At least 2 evidence source types required"]);
        assert_eq!(gate.traffic_light(&GateConfig::default()), TrafficLight::Amber);
    }

    #[test]
    fn test_missing_fields_default() {
        let gate = GateSummary::from_run_summary(&json!({ "gate": {} })).unwrap();
        assert_eq!(gate.passed, None);
        assert!(!gate.has_passed());
        assert_eq!(gate.evidence_count, 0);
        assert_eq!(gate.average_confidence, 0.0);
        assert!(gate.reasons.is_empty());
        assert_eq!(gate.traffic_light(&GateConfig::default()), TrafficLight::Red);
    }

    #[test]
    fn test_non_numeric_fields_default_to_zero() {
        let summary = json!({
            "gate": { "evidenceCount": "5", "sourceTypeCount": null, "averageConfidence": "high", "passed": "yes" }
        });
        let gate = GateSummary::from_run_summary(&summary).unwrap();
        assert_eq!(gate.evidence_count, 0);
        assert_eq!(gate.source_type_count, 0);
        assert_eq!(gate.average_confidence, 0.0);
        assert_eq!(gate.passed, None);
    }

    #[test]
    fn test_absent_or_malformed_gate() {
        assert!(GateSummary::from_run_summary(&json!({})).is_none());
        assert!(GateSummary::from_run_summary(&json!({ "gate": null })).is_none());
        assert!(GateSummary::from_run_summary(&json!({ "gate": [1, 2] })).is_none());
        assert!(GateSummary::from_run_summary(&json!("summary")).is_none());
    }

    #[test]
    fn test_from_result_round_trips_through_json() {
        let result = crate::evaluate_quality_gate(&[]);
        let summary = json!({ "gate": serde_json::to_value(&result).unwrap() });
        let gate = GateSummary::from_run_summary(&summary).unwrap();
        assert_eq!(gate, GateSummary::from_result(&result));
    }
}

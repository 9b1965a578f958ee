//! Human override of the gate and the decisions that depend on it

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use qualifai_domain::TrafficLight;

use crate::{GateConfig, GateSummary, GatekeeperError};

/// A reviewer's persisted verdict on a research run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityReview {
    /// Whether the reviewer approved the run
    pub approved: bool,

    /// Trimmed justification, None when left empty
    pub notes: Option<String>,
}

impl QualityReview {
    /// Approved with a justification of at least `min_notes_len` characters
    pub fn has_override_reason(&self, min_notes_len: usize) -> bool {
        self.approved
            && self
                .notes
                .as_deref()
                .is_some_and(|notes| notes.trim().chars().count() >= min_notes_len)
    }
}

/// Validate and normalize a reviewer's verdict before it is persisted
///
/// Approving a run whose gate did not pass needs written notes.
pub fn record_review(
    gate_passed: bool,
    approved: bool,
    notes: Option<&str>,
    min_notes_len: usize,
) -> Result<QualityReview, GatekeeperError> {
    let notes = notes.map(str::trim).unwrap_or_default();
    let actual = notes.chars().count();

    if approved && !gate_passed && actual < min_notes_len {
        warn!(required = min_notes_len, actual, "Rejected override without a clear reason");
        return Err(GatekeeperError::OverrideReasonTooShort {
            required: min_notes_len,
            actual,
        });
    }

    info!(approved, gate_passed, "Recorded quality review");
    Ok(QualityReview {
        approved,
        notes: (!notes.is_empty()).then(|| notes.to_string()),
    })
}

/// Whether a downstream step may proceed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Proceed
    Allowed,
    /// Refuse, with the message to show the operator
    Blocked(String),
}

impl Decision {
    /// Whether the step may proceed
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Allowed => f.write_str("allowed"),
            Decision::Blocked(reason) => write!(f, "blocked: {}", reason),
        }
    }
}

/// Whether outreach assets may be generated for a run
///
/// With strict gating on, a run needs a gate that recorded a pass or an
/// approved review carrying a justification. A gate without a boolean
/// verdict counts as no gate at all.
pub fn asset_generation_decision(
    gate: Option<&GateSummary>,
    review: Option<&QualityReview>,
    config: &GateConfig,
) -> Decision {
    if !config.strict_gate {
        return Decision::Allowed;
    }
    let gate = gate.filter(|gate| gate.passed.is_some());
    if gate.is_some_and(GateSummary::has_passed) {
        return Decision::Allowed;
    }
    if review.is_some_and(|review| review.has_override_reason(config.override_min_notes_len)) {
        info!("Asset generation allowed by reviewer override");
        return Decision::Allowed;
    }

    let reasons = match gate {
        Some(gate) if !gate.reasons.is_empty() => gate.reasons.join("; "),
        _ => "evidence quality gate not met".to_string(),
    };
    Decision::Blocked(format!(
        "Cannot generate assets before gate passes: {}. Review quality and add override reason if proceeding.",
        reasons
    ))
}

/// Whether outreach may be sent given the run's traffic light
///
/// Red never sends; amber sends only after a reviewer approved the run.
pub fn send_decision(light: TrafficLight, review: Option<&QualityReview>) -> Decision {
    match light {
        TrafficLight::Red => Decision::Blocked(
            "Quality gate failed: too little evidence to send outreach. Run research first."
                .to_string(),
        ),
        TrafficLight::Amber if !review.is_some_and(|review| review.approved) => Decision::Blocked(
            "Quality gate: limited sources found. Approve the quality review before sending."
                .to_string(),
        ),
        TrafficLight::Amber | TrafficLight::Green => Decision::Allowed,
    }
}

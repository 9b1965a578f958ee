//! Review command implementation.

use crate::cli::{ReviewAction, ReviewArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use qualifai_domain::TrafficLight;
use qualifai_gatekeeper::{
    asset_generation_decision, record_review, send_decision, Decision, GateConfig, GateSummary,
    QualityReview,
};
use serde_json::Value;
use std::fs;

use super::Outcome;

/// Execute the review command.
pub fn execute_review(args: ReviewArgs, config: &Config, formatter: &Formatter) -> Result<Outcome> {
    let contents = fs::read_to_string(&args.file)?;
    let summary: Value = serde_json::from_str(&contents)?;
    let gate = GateSummary::from_run_summary(&summary);

    let review = if args.approved || args.notes.is_some() {
        // Notes are only demanded when a gate explicitly recorded a failure.
        let gate_passed = gate.as_ref().and_then(|gate| gate.passed).unwrap_or(true);
        Some(record_review(
            gate_passed,
            args.approved,
            args.notes.as_deref(),
            config.gate.override_min_notes_len,
        )?)
    } else {
        None
    };

    let (light, decision) = decide(args.action, gate.as_ref(), review.as_ref(), &config.gate);
    let action = match args.action {
        ReviewAction::Send => "send",
        ReviewAction::Assets => "assets",
    };
    println!("{}", formatter.format_decision(action, light, &decision));

    Ok(if decision.is_allowed() {
        Outcome::Success
    } else {
        Outcome::Blocked
    })
}

/// Apply the policy for one downstream step.
///
/// A summary without a gate sends as red: there is no evidence on record.
fn decide(
    action: ReviewAction,
    gate: Option<&GateSummary>,
    review: Option<&QualityReview>,
    config: &GateConfig,
) -> (Option<TrafficLight>, Decision) {
    match action {
        ReviewAction::Send => {
            let light = gate.map_or(TrafficLight::Red, |gate| gate.traffic_light(config));
            (Some(light), send_decision(light, review))
        }
        ReviewAction::Assets => (None, asset_generation_decision(gate, review, config)),
    }
}

//! Light command implementation.

use crate::cli::LightArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use qualifai_domain::confidence::is_valid_confidence;
use qualifai_gatekeeper::classify_traffic_light;

use super::Outcome;

/// Execute the light command.
pub fn execute_light(args: LightArgs, config: &Config, formatter: &Formatter) -> Result<Outcome> {
    if !is_valid_confidence(args.average_confidence) {
        return Err(CliError::InvalidInput(
            "Average confidence must be between 0.0 and 1.0".to_string(),
        ));
    }

    let light = classify_traffic_light(
        args.evidence_count,
        args.source_type_count,
        args.average_confidence,
        &config.gate,
    );
    println!("{}", formatter.format_light(light));
    Ok(Outcome::Success)
}

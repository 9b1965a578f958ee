//! Gate command implementation.

use crate::cli::GateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use qualifai_discovery::EvidenceDeduplicator;
use qualifai_domain::EvidenceItem;
use qualifai_gatekeeper::parse_evidence_records;
use std::fs;
use tracing::info;

use super::Outcome;

/// Execute the gate command.
pub fn execute_gate(args: GateArgs, config: &Config, formatter: &Formatter) -> Result<Outcome> {
    let contents = fs::read_to_string(&args.file)?;
    let items = load_evidence(&contents, args.dedupe, config)?;

    let gatekeeper = config.gatekeeper();
    let result = gatekeeper.evaluate(&items);
    let light = gatekeeper.traffic_light(&result);

    println!("{}", formatter.format_gate(&result, light)?);

    Ok(if result.passed {
        Outcome::Success
    } else {
        Outcome::Blocked
    })
}

/// Parse evidence records, optionally deduplicating and capping them.
fn load_evidence(contents: &str, dedupe: bool, config: &Config) -> Result<Vec<EvidenceItem>> {
    let items = parse_evidence_records(contents)?;
    if !dedupe {
        return Ok(items);
    }

    let before = items.len();
    let items = EvidenceDeduplicator::from_config(&config.discovery).dedupe(items);
    info!(before, after = items.len(), "Deduplicated evidence");
    Ok(items)
}

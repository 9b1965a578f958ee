//! Defaults command implementation.

use crate::cli::DefaultsArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use qualifai_discovery::default_research_urls;

use super::Outcome;

/// Execute the defaults command.
pub fn execute_defaults(args: DefaultsArgs, formatter: &Formatter) -> Result<Outcome> {
    let domain = args.domain.trim();
    if domain.is_empty() || domain.contains("://") || domain.contains('/') {
        return Err(CliError::InvalidInput(format!(
            "Expected a bare domain like example.nl, got '{}'",
            args.domain
        )));
    }

    println!("{}", formatter.format_urls(&default_research_urls(domain))?);
    Ok(Outcome::Success)
}

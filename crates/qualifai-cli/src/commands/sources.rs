//! Sources command implementation.

use crate::cli::SourcesArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use chrono::{DateTime, Utc};
use qualifai_discovery::{default_research_urls, SourceSetBuilder};
use std::fs;

use super::Outcome;

/// Execute the sources command.
pub fn execute_sources(args: SourcesArgs, config: &Config, formatter: &Formatter) -> Result<Outcome> {
    let sitemap = read_optional(args.sitemap.as_deref())?;
    let serp = read_optional(args.serp.as_deref())?;
    let defaults = match (&args.default_file, &args.domain) {
        (Some(path), _) => read_urls_from_file(path)?,
        (None, Some(domain)) => default_research_urls(domain),
        (None, None) => Vec::new(),
    };
    let serp_discovered_at = args
        .serp_discovered_at
        .as_deref()
        .map(parse_timestamp)
        .transpose()?;

    let set = SourceSetBuilder::new(config.discovery.clone()).build(
        &sitemap,
        &serp,
        &defaults,
        serp_discovered_at,
    );

    println!("{}", formatter.format_source_set(&set)?);
    Ok(Outcome::Success)
}

fn read_optional(path: Option<&str>) -> Result<Vec<String>> {
    path.map(read_urls_from_file)
        .transpose()
        .map(Option::unwrap_or_default)
}

/// Read URLs from a file (one per line); blank lines and `#` comments are skipped.
fn read_urls_from_file(path: &str) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| CliError::InvalidInput(format!("Invalid timestamp '{}': {}", value, e)))
}

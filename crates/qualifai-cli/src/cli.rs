//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};

/// Qualifai CLI - Check whether prospect research is good enough for outreach.
#[derive(Debug, Parser)]
#[command(name = "qualifai")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "QUALIFAI_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (verdicts and URLs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate the quality gate over a file of evidence records
    Gate(GateArgs),

    /// Classify aggregate evidence numbers as red, amber or green
    Light(LightArgs),

    /// Build a deduplicated source set from discovered URL lists
    Sources(SourcesArgs),

    /// List the research URLs guessed for a bare domain
    Defaults(DefaultsArgs),

    /// Apply the review policy to a persisted run summary
    Review(ReviewArgs),
}

/// Arguments for the gate command.
#[derive(Debug, Parser)]
pub struct GateArgs {
    /// JSON file holding an array of evidence records
    pub file: String,

    /// Deduplicate and cap the evidence before evaluating
    #[arg(long)]
    pub dedupe: bool,
}

/// Arguments for the light command.
#[derive(Debug, Parser)]
pub struct LightArgs {
    /// Number of evidence items
    pub evidence_count: usize,

    /// Number of distinct source types
    pub source_type_count: usize,

    /// Average confidence (0.0-1.0)
    pub average_confidence: f64,
}

/// Arguments for the sources command.
#[derive(Debug, Parser)]
pub struct SourcesArgs {
    /// File of sitemap URLs (one per line)
    #[arg(long)]
    pub sitemap: Option<String>,

    /// File of search-result URLs (one per line)
    #[arg(long)]
    pub serp: Option<String>,

    /// File of guessed URLs (one per line)
    #[arg(long = "default", conflicts_with = "domain")]
    pub default_file: Option<String>,

    /// Guess URLs for this domain instead of reading a file
    #[arg(long)]
    pub domain: Option<String>,

    /// When the search results were fetched (RFC 3339)
    #[arg(long)]
    pub serp_discovered_at: Option<String>,
}

/// Arguments for the defaults command.
#[derive(Debug, Parser)]
pub struct DefaultsArgs {
    /// Domain without scheme, e.g. example.nl
    pub domain: String,
}

/// Arguments for the review command.
#[derive(Debug, Parser)]
pub struct ReviewArgs {
    /// JSON file holding the run summary
    pub file: String,

    /// Record the run as approved by a reviewer
    #[arg(long)]
    pub approved: bool,

    /// Reviewer notes; required when approving a failed gate
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Step to check the run against
    #[arg(short, long, value_enum, default_value = "send")]
    pub action: ReviewAction,
}

/// Downstream step a review is checked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReviewAction {
    /// Sending outreach
    Send,
    /// Generating outreach assets
    Assets,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

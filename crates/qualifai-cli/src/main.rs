//! Qualifai CLI - evidence quality checks for prospect research runs.

use clap::Parser;
use qualifai_cli::commands;
use qualifai_cli::{Cli, Command, Config, Formatter, Outcome};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so command output stays pipeable.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> qualifai_cli::Result<Outcome> {
    // Load config
    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Gate(args) => commands::execute_gate(args, &config, &formatter),
        Command::Light(args) => commands::execute_light(args, &config, &formatter),
        Command::Sources(args) => commands::execute_sources(args, &config, &formatter),
        Command::Defaults(args) => commands::execute_defaults(args, &formatter),
        Command::Review(args) => commands::execute_review(args, &config, &formatter),
    }
}

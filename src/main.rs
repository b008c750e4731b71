//! Sumi-Lens main entry point
//!
//! This is the command-line interface for the Sumi-Lens single-page SEO auditor.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use sumi_lens::config::{load_config_with_hash, validate_config, Config, Strategy};
use sumi_lens::output::{export_csv, format_outcome, to_json};
use sumi_lens::pipeline::analyze;
use sumi_lens::AnalysisOutcome;
use tracing_subscriber::EnvFilter;

/// Sumi-Lens: a single-page SEO auditor
///
/// Sumi-Lens fetches one page, extracts its meta tags, keyword density,
/// on-page structure and content signals, checks its outbound links and
/// prints prioritized recommendations.
#[derive(Parser, Debug)]
#[command(name = "sumi-lens")]
#[command(version = "1.0.0")]
#[command(about = "A single-page SEO auditor", long_about = None)]
struct Cli {
    /// Page to analyse (absolute http or https URL)
    #[arg(value_name = "URL")]
    url: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Credential for the external performance scoring service
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Execution profile for external performance scoring
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Minimum word length counted for keyword density
    #[arg(long, value_name = "N")]
    min_length: Option<usize>,

    /// Maximum number of outbound links to check
    #[arg(long, value_name = "N")]
    max_links: Option<usize>,

    /// Also write the report as CSV to this file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    let outcome = analyze(config, &cli.url)
        .await
        .with_context(|| format!("Cannot analyse {}", cli.url))?;

    if cli.json {
        println!("{}", to_json(&outcome)?);
    } else {
        print!("{}", format_outcome(&outcome));
    }

    match &outcome {
        AnalysisOutcome::Completed(report) => {
            if let Some(path) = &cli.csv {
                export_csv(report, path)
                    .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
            }
            Ok(())
        }
        AnalysisOutcome::FetchFailed { error, .. } => {
            tracing::error!("Analysis aborted: {}", error);
            std::process::exit(1);
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_lens=info,warn"),
            1 => EnvFilter::new("sumi_lens=debug,info"),
            2 => EnvFilter::new("sumi_lens=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the optional config file and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(api_key) = &cli.api_key {
        config.speed.api_key = Some(api_key.clone());
    }
    if let Some(strategy) = cli.strategy {
        config.speed.strategy = strategy;
    }
    if let Some(min_length) = cli.min_length {
        config.density.min_length = min_length;
    }
    if let Some(max_links) = cli.max_links {
        config.links.max_links = max_links;
    }

    validate_config(&config).context("Invalid configuration")?;
    Ok(config)
}

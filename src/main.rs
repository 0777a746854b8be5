//! Command-line entry point for the AtCoder rating estimator
//!
//! Reads a downloaded contest history (and optionally the contest list),
//! estimates the rating for the chosen contest type, and prints a report.

use anyhow::{Context, Result};
use atcoder_rating::config::{validate_config, AppConfig};
use atcoder_rating::contest::{load_contest_results, load_contests};
use atcoder_rating::service::{RatingReport, RatingService};
use atcoder_rating::types::ContestType;
use atcoder_rating::utils::{current_timestamp, day_of, parse_base_date};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

/// AtCoder Rating Estimator - ratings from contest performance history
#[derive(Parser)]
#[command(
    name = "atcoder-rating",
    version,
    about = "Estimates AtCoder ratings from a user's contest performance history",
    long_about = "Reads the JSON exported from an AtCoder user's contest history page \
                 (https://atcoder.jp/users/<user>/history/json) and estimates the algorithm \
                 rating, or both heuristic ratings, using AtCoder's published formulas."
)]
struct Args {
    /// Contest history JSON file
    #[arg(value_name = "HISTORY")]
    history: PathBuf,

    /// Contest list JSON used to weigh heuristic contests by duration
    #[arg(long, value_name = "FILE")]
    contests: Option<PathBuf>,

    /// Which rating to estimate
    #[arg(short = 't', long, value_enum, default_value_t = ContestType::Algorithm)]
    contest_type: ContestType,

    /// Reference date for time decay (YYYY-MM-DD or RFC 3339), defaults to today
    #[arg(short, long, value_name = "DATE")]
    base_date: Option<String>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write Prometheus metrics in text format to this file after the run
    #[arg(long, value_name = "FILE")]
    metrics_out: Option<PathBuf>,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without estimating")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    validate_config(&config)?;
    Ok(config)
}

fn display_config(config: &AppConfig) {
    info!("{}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!(
        "   Contest weighting: after {}, contests under {}s weigh {}",
        config.rating.policy_change_year,
        config.rating.long_contest_threshold_seconds,
        config.rating.short_contest_weight
    );
}

fn print_report(report: &RatingReport) {
    println!("Contest type: {}", report.contest_type);
    println!(
        "Contests: {} considered, {} skipped",
        report.contests_considered, report.contests_skipped
    );
    if let Some(base_date) = report.base_date {
        println!("Base date: {}", base_date);
    }
    println!("Rating: {:.0} ({})", report.rating, report.color);
    for estimate in &report.estimates {
        println!(
            "  {:<14} {:>6.0}  {}",
            estimate.estimator, estimate.rating, estimate.color
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if args.dry_run {
        info!("Configuration validation successful");
        display_config(&config);
        return Ok(());
    }

    let base_date = match &args.base_date {
        Some(value) => parse_base_date(value)?,
        None => day_of(&current_timestamp()),
    };

    let results = load_contest_results(&args.history)?;
    let contests = match &args.contests {
        Some(path) => load_contests(path)?,
        None => {
            if args.contest_type == ContestType::Heuristic {
                warn!("No contest list given; every heuristic contest will weigh 1");
            }
            Vec::new()
        }
    };

    let service = RatingService::new(config)?;
    let outcome = service.evaluate(args.contest_type, &results, contests, base_date);

    // Written before the outcome is checked so failed estimations are exported too.
    if let Some(path) = &args.metrics_out {
        let text = service.metrics().gather_text()?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write metrics: {}", path.display()))?;
        info!("Wrote metrics to {}", path.display());
    }

    let report = outcome?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

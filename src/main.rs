use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use fittrack::config::AppConfig;
use fittrack::driver::{render, summarize, OutputFormat};
use fittrack::logging::init_logging;

/// fittrack - Workout Summary CLI
///
/// Reads raw sensor packages (swimming, running, sports walking) and prints
/// distance, mean speed and calories for each, one line per package.
#[derive(Parser)]
#[command(name = "fittrack")]
#[command(author = "fittrack Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Workout Summary CLI", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (text, json); overrides the config file
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,

    /// Increase verbosity of logging on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(),
    };

    let mut log_config = config.logging.clone();
    log_config.level = log_config.level.raised_by(cli.verbose);
    init_logging(&log_config)?;

    let format = cli.format.unwrap_or(config.output);

    for package in config.packages_or_sample() {
        let summary = match summarize(&package) {
            Ok(summary) => summary,
            Err(err) => {
                tracing::debug!(code = %package.code, error = ?err, "Package rejected");
                eprintln!("{}", format!("✗ {}", err.user_message()).red().bold());
                return Ok(ExitCode::FAILURE);
            }
        };

        println!("{}", render(&summary, format)?);
    }

    Ok(ExitCode::SUCCESS)
}

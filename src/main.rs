use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use superstore_reports::engine::{RunOptions, run_reports_with};
use superstore_reports::io::{read_records, write_report_set};
use superstore_reports::logging;
use superstore_reports::shared::config::CONFIG;
use tracing::info;

#[derive(Parser)]
#[command(name = "superstore_reports")]
#[command(about = "Grouped profitability reports over a Sample Superstore CSV", long_about = None)]
struct Args {
    /// Input CSV file
    /// Defaults to io.input_path from the config file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory for the report files
    /// Defaults to io.output_dir from the config file
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Run the four reports concurrently
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init()?;

    let input = args
        .input
        .unwrap_or_else(|| PathBuf::from(&CONFIG.io.input_path));
    let output_dir = args
        .output_dir
        .unwrap_or_else(|| PathBuf::from(&CONFIG.io.output_dir));
    let options = RunOptions {
        parallel: args.parallel || CONFIG.engine.parallel,
    };

    info!(input = %input.display(), output = %output_dir.display(), "Starting report run");

    let raw = read_records(&input)
        .inspect_err(|e| e.log_error())
        .with_context(|| format!("failed to read {}", input.display()))?;

    let reports = run_reports_with(&raw, options);

    write_report_set(&output_dir, &reports)
        .inspect_err(|e| e.log_error())
        .with_context(|| format!("failed to write reports to {}", output_dir.display()))?;

    for (name, rows) in reports.summary() {
        println!("{}: {} rows", name, rows);
    }
    Ok(())
}

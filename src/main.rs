use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, subscriber::set_global_default, Level};

use demographic_data_analyzer::{Dataset, StatisticsComputer};

const CSV_FILE_PATH: &str = "adult.data.csv";

/// Descriptive statistics over a census extract
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV file with a header row
    #[arg(env = "DEMOGRAPHIC_DATA", default_value = CSV_FILE_PATH)]
    path: PathBuf,

    /// Do not print the report
    #[arg(short, long)]
    quiet: bool,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,

    /// Sets the level of verbosity
    #[arg(short, long, default_value = "WARN")]
    verbosity: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let collector = tracing_subscriber::fmt()
        .with_max_level(args.verbosity)
        .with_writer(std::io::stderr)
        .finish();
    set_global_default(collector)?;

    let dataset = Dataset::load(&args.path)?;
    let demographics = StatisticsComputer::new(&dataset).compute(!args.quiet)?;
    info!(records = dataset.len(), "computed statistics");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&demographics)?);
    }
    Ok(())
}

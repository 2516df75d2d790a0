//! Command-line front end: load a roster CSV and print the chosen presenters.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use conference_slots::optimizer::{Optimizer, OptimizerConfig};
use conference_slots::roster::Roster;
use conference_slots::ConferenceResult;

/// Pick the cheapest presenter line-up that exactly fills a conference
#[derive(Parser, Debug)]
#[command(name = "conference")]
#[command(about = "Pick the cheapest presenter line-up that exactly fills a conference")]
struct Args {
    /// CSV file with `name`, `duration` and `cost` columns
    #[arg(default_value = "test_file.csv")]
    input: PathBuf,

    /// Total conference length in hours
    #[arg(long, default_value_t = 8)]
    duration: u32,

    /// Requested slot count (recorded, does not bound the search)
    #[arg(long, default_value_t = 3)]
    slots: usize,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn run(args: &Args) -> ConferenceResult<()> {
    let roster = Roster::from_path(&args.input)?;
    let config = OptimizerConfig::new(args.duration).with_slot_count(args.slots);
    let schedule = Optimizer::run(&roster, &config)?;

    println!(
        "Following are selected presenters {} with incurred cost: {}",
        schedule, schedule.cost
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "conference arrangement failed");
            ExitCode::FAILURE
        }
    }
}

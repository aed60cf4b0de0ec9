//! Cachegrind Compare CLI
//!
//! Compares cachegrind traces from two SDK versions and prints where the
//! time goes (configuration, JSON and string handling) in each.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::io::Write;
use std::path::PathBuf;

use cachegrind_compare::commands::{execute_compare, validate_args, CompareArgs};
use cachegrind_compare::utils::config::{
    DEFAULT_TOP_FUNCTIONS, DEFAULT_V2_DIR, DEFAULT_V3_DIR,
};

/// Cachegrind Compare - v2 vs v3 trace analysis
#[derive(Parser, Debug)]
#[command(name = "cachegrind-compare")]
#[command(version, about, long_about = None)]
struct Cli {
    /// v2 profiler output directory
    #[arg(long, default_value = DEFAULT_V2_DIR)]
    v2_dir: PathBuf,

    /// v3 profiler output directory
    #[arg(long, default_value = DEFAULT_V3_DIR)]
    v3_dir: PathBuf,

    /// Also list the top N functions by time for each version (default N: 20)
    #[arg(long, value_name = "N", num_args = 0..=1)]
    top: Option<Option<usize>>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = CompareArgs {
        v2_dir: cli.v2_dir,
        v3_dir: cli.v3_dir,
        top_functions: cli.top.map(|n| n.unwrap_or(DEFAULT_TOP_FUNCTIONS)),
    };

    // Validate args first
    validate_args(&args)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_compare(&args, &mut out)?;
    out.flush()?;

    Ok(())
}

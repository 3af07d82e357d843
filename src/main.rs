//! # tracksplits
//!
//! Command-line front end for per-minute workout splits.
//!
//! ## Usage
//!
//! ```bash
//! # Print the per-minute splits table
//! tracksplits minutes morning_run.gpx
//!
//! # Inspect a recording without aggregating
//! tracksplits info morning_run.tcx
//!
//! # Generate a synthetic recording to try the tool out
//! tracksplits demo demo_run.gpx
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}

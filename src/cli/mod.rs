use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod demo;
mod info;
mod minutes;

/// tracksplits - Per-minute pace, heart rate, and elevation splits
#[derive(Parser)]
#[command(name = "tracksplits")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the per-minute splits table for a recording
    Minutes {
        /// Input recording (.tcx or .gpx)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Load display settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Also write the rows to a CSV file
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        /// Also write the rows to a JSON file
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,

        /// Hide the grade column
        #[arg(long)]
        no_grade: bool,

        /// Print without ANSI styling
        #[arg(long)]
        no_color: bool,
    },

    /// Show an overview of a recording without aggregating
    Info {
        /// Input recording (.tcx or .gpx)
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Generate a synthetic GPX recording for trying the tool out
    Demo {
        /// Output GPX file path
        #[arg(value_name = "OUTPUT", default_value = "demo_run.gpx")]
        output: PathBuf,

        /// Length of the generated recording in minutes
        #[arg(short = 'm', long, default_value = "8")]
        minutes: u32,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Minutes {
            input,
            config,
            csv,
            json,
            no_grade,
            no_color,
        } => minutes::run(input, config, csv, json, no_grade, no_color),
        Commands::Info { file } => info::run(file),
        Commands::Demo { output, minutes } => demo::run(output, minutes),
    }
}

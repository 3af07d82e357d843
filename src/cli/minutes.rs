use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use tracksplits::report::{write_csv, write_json, SplitsTable};
use tracksplits::summary::summarize;
use tracksplits::track::read_track;

use super::config::Config;

/// Print the per-minute splits table for a recording
pub fn run(
    input: PathBuf,
    config: Option<PathBuf>,
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
    no_grade: bool,
    no_color: bool,
) -> Result<()> {
    if !input.exists() {
        anyhow::bail!("Input file does not exist: {}", input.display());
    }

    let config = match config {
        Some(path) => Config::from_file(&path)?,
        None => Config::default(),
    };
    // Flags win over the config file.
    let show_grade = !no_grade && config.display.grade.unwrap_or(true);
    let color = !no_color && config.display.color.unwrap_or(true);

    info!("Reading {}", input.display());
    let track = read_track(&input)
        .with_context(|| format!("Failed to read track from {}", input.display()))?;

    let rows = summarize(&track);
    info!("Derived {} minute rows", rows.len());

    let table = SplitsTable::new(&rows).with_grade(show_grade);
    if color {
        print!("{}", table.format_colored());
    } else {
        print!("{table}");
    }

    if let Some(path) = csv {
        write_csv(&path, &rows)
            .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
        info!("Wrote CSV rows to {}", path.display());
    }

    if let Some(path) = json {
        write_json(&path, &rows)
            .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
        info!("Wrote JSON rows to {}", path.display());
    }

    Ok(())
}

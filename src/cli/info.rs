use anyhow::{Context, Result};
use std::path::PathBuf;

use tracksplits::summary::TrackOverview;
use tracksplits::track::read_track;

/// Show an overview of a recording without aggregating
pub fn run(file: PathBuf) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let track = read_track(&file)
        .with_context(|| format!("Failed to read track from {}", file.display()))?;
    let overview = TrackOverview::from_track(&track);

    println!("Recording Overview");
    println!("==================");
    println!("File: {}", file.display());
    println!();
    println!("{overview}");

    Ok(())
}

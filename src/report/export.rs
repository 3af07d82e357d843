//! CSV and JSON export of summary rows.
//!
//! Exports carry the raw record fields (seconds, unrounded pace values),
//! not the `M:SS` display formatting, so downstream tools can compute with
//! them directly. Absent readings become empty CSV cells and JSON `null`s.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::summary::MinuteSummary;

/// Errors raised while writing summary exports.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// I/O error writing an export file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write summary rows as CSV with a header row.
pub fn write_csv(path: &Path, rows: &[MinuteSummary]) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write summary rows as a pretty-printed JSON array.
pub fn write_json(path: &Path, rows: &[MinuteSummary]) -> Result<(), ReportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

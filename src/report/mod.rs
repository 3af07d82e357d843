//! Terminal rendering of summary rows.

use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use crate::summary::{format_pace, MinuteSummary};

pub mod export;

pub use export::{write_csv, write_json, ReportError};

/// Fixed-width table over [`MinuteSummary`] rows.
///
/// The [`fmt::Display`] form carries no escape codes and is safe to pipe;
/// [`SplitsTable::format_colored`] adds ANSI styling and falls back to the
/// plain form when the `colorized_output` feature is disabled.
#[derive(Debug)]
pub struct SplitsTable<'a> {
    rows: &'a [MinuteSummary],
    show_grade: bool,
}

impl<'a> SplitsTable<'a> {
    /// Create a table over the given rows with all columns shown.
    pub fn new(rows: &'a [MinuteSummary]) -> Self {
        Self {
            rows,
            show_grade: true,
        }
    }

    /// Choose whether the grade column is rendered.
    pub fn with_grade(mut self, show_grade: bool) -> Self {
        self.show_grade = show_grade;
        self
    }

    /// Render the table with ANSI styling for terminals.
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            let mut output = String::new();

            let mut header = format!(
                "{:>6}  {:>8}  {:>8}  {:>6}  {:>9}",
                "Minute", "Pace/km", "Pace/mi", "HR", "Elev (m)"
            );
            if self.show_grade {
                header.push_str(&format!("  {:>9}", "Grade (%)"));
            }
            output.push_str(&format!("{}\n", style(header).bold()));

            for row in self.rows {
                output.push_str(&format!(
                    "{}  {:>8}  {:>8}  {:>6}  {:>9}",
                    style(format!("{:>6}", row.minute)).cyan(),
                    format_pace(row.pace_secs_per_km),
                    format_pace(row.pace_secs_per_mi),
                    fmt_opt(row.avg_heart_rate_bpm, 0),
                    fmt_opt(row.avg_elevation_m, 1),
                ));
                if self.show_grade {
                    output.push_str(&format!("  {:>9}", fmt_opt(row.grade_percent, 1)));
                }
                output.push('\n');
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for SplitsTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6}  {:>8}  {:>8}  {:>6}  {:>9}",
            "Minute", "Pace/km", "Pace/mi", "HR", "Elev (m)"
        )?;
        if self.show_grade {
            write!(f, "  {:>9}", "Grade (%)")?;
        }
        writeln!(f)?;

        for row in self.rows {
            write!(
                f,
                "{:>6}  {:>8}  {:>8}  {:>6}  {:>9}",
                row.minute,
                format_pace(row.pace_secs_per_km),
                format_pace(row.pace_secs_per_mi),
                fmt_opt(row.avg_heart_rate_bpm, 0),
                fmt_opt(row.avg_elevation_m, 1),
            )?;
            if self.show_grade {
                write!(f, "  {:>9}", fmt_opt(row.grade_percent, 1))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "-".to_string(),
    }
}

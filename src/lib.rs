//! # tracksplits - Per-Minute Workout Splits
//!
//! `tracksplits` reads a single workout recording in TCX or GPX form and
//! summarizes it into per-minute splits: pace, mean heart rate, mean
//! elevation, and grade.
//!
//! ## How it works
//!
//! - [`track`] stream-parses the recording into timestamped [`track::Sample`]s.
//! - [`summary`] groups the samples into one-minute windows anchored at the
//!   first timestamp and derives one [`summary::MinuteSummary`] per window
//!   that holds at least two samples.
//! - [`report`] renders the rows as a terminal table or exports them as
//!   CSV/JSON.
//!
//! Distance is reconstructed per format: TCX recordings carry a cumulative
//! `DistanceMeters` field whose deltas are summed, while GPX recordings yield
//! distance from the haversine great-circle length between consecutive
//! coordinates.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use tracksplits::report::SplitsTable;
//! use tracksplits::summary::summarize;
//! use tracksplits::track::read_track;
//!
//! let track = read_track(Path::new("morning_run.gpx"))?;
//! let rows = summarize(&track);
//! print!("{}", SplitsTable::new(&rows));
//! # Ok::<(), tracksplits::track::TrackError>(())
//! ```
//!
//! ## Summary record
//!
//! | Field | Type | Notes |
//! |-------|------|-------|
//! | `minute` | `u32` | 1-based minute number within the recording |
//! | `pace_secs_per_km` | `f64` | `0.0` when the window covered no distance |
//! | `pace_secs_per_mi` | `f64` | `0.0` when the window covered no distance |
//! | `avg_heart_rate_bpm` | `Option<f64>` | absent when no readings in the window |
//! | `avg_elevation_m` | `Option<f64>` | absent when no readings in the window |
//! | `grade_percent` | `Option<f64>` | absent when the window covered no distance |
//!
//! A window with fewer than two samples has no pace interval and is dropped
//! from the output.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod report;
pub mod summary;
pub mod track;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::report::{write_csv, write_json, ReportError, SplitsTable};
    pub use crate::summary::{
        format_pace, summarize, MinuteSummary, TrackOverview, METERS_PER_MILE,
    };
    pub use crate::track::{
        read_track, read_track_from, DistanceSource, Sample, Track, TrackError, TrackFormat,
    };
}

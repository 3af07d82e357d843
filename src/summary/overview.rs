//! Whole-track overview, shown by the `info` command.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::track::{Track, TrackFormat};

/// Headline figures for a recording, computed without minute aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackOverview {
    /// Source schema of the recording
    pub format: TrackFormat,
    /// Number of track points
    pub points: usize,
    /// First sample timestamp
    pub start_time: Option<DateTime<Utc>>,
    /// Last sample timestamp
    pub end_time: Option<DateTime<Utc>>,
    /// Wall-clock span between first and last sample, in seconds
    pub duration_secs: f64,
    /// Total distance over all consecutive pairs, in meters
    pub total_distance_m: f64,
    /// Sum of positive elevation deltas between present readings, in meters
    pub elevation_gain_m: f64,
    /// Sum of negative elevation deltas between present readings, in meters
    pub elevation_loss_m: f64,
    /// Whether any sample carries a coordinate pair
    pub has_coordinates: bool,
    /// Whether any sample carries a cumulative distance reading
    pub has_cumulative_distance: bool,
    /// Whether any sample carries an elevation reading
    pub has_elevation: bool,
    /// Whether any sample carries a heart-rate reading
    pub has_heart_rate: bool,
}

impl TrackOverview {
    /// Compute an overview of a parsed track.
    pub fn from_track(track: &Track) -> Self {
        let source = track.distance_source();
        let mut total_distance_m = 0.0;
        for pair in track.samples.windows(2) {
            total_distance_m += super::pair_distance(&pair[0], &pair[1], source);
        }

        // Gain and loss run over consecutive PRESENT readings, so a gap in
        // the elevation channel never fabricates a climb from zero.
        let mut elevation_gain_m = 0.0;
        let mut elevation_loss_m = 0.0;
        let mut last_elevation: Option<f64> = None;
        for sample in &track.samples {
            if let Some(elevation) = sample.elevation_m {
                if let Some(prev) = last_elevation {
                    let delta = elevation - prev;
                    if delta >= 0.0 {
                        elevation_gain_m += delta;
                    } else {
                        elevation_loss_m -= delta;
                    }
                }
                last_elevation = Some(elevation);
            }
        }

        let duration_secs = match (track.start_time(), track.end_time()) {
            (Some(start), Some(end)) => {
                end.signed_duration_since(start).num_milliseconds() as f64 / 1000.0
            }
            _ => 0.0,
        };

        TrackOverview {
            format: track.format,
            points: track.len(),
            start_time: track.start_time(),
            end_time: track.end_time(),
            duration_secs,
            total_distance_m,
            elevation_gain_m,
            elevation_loss_m,
            has_coordinates: track.samples.iter().any(|s| s.coordinate().is_some()),
            has_cumulative_distance: track
                .samples
                .iter()
                .any(|s| s.cumulative_distance_m.is_some()),
            has_elevation: track.samples.iter().any(|s| s.elevation_m.is_some()),
            has_heart_rate: track.samples.iter().any(|s| s.heart_rate_bpm.is_some()),
        }
    }

    fn channels_line(&self) -> String {
        let mut present = Vec::new();
        if self.has_coordinates {
            present.push("coordinates");
        }
        if self.has_cumulative_distance {
            present.push("cumulative distance");
        }
        if self.has_elevation {
            present.push("elevation");
        }
        if self.has_heart_rate {
            present.push("heart rate");
        }
        if present.is_empty() {
            "none".to_string()
        } else {
            present.join(", ")
        }
    }
}

impl fmt::Display for TrackOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Format:          {}", self.format)?;
        writeln!(f, "Track points:    {}", self.points)?;
        writeln!(f, "Start time:      {}", fmt_time(self.start_time))?;
        writeln!(f, "End time:        {}", fmt_time(self.end_time))?;
        writeln!(f, "Duration:        {}", format_duration(self.duration_secs))?;
        writeln!(f, "Total distance:  {:.2} km", self.total_distance_m / 1000.0)?;
        writeln!(f, "Elevation gain:  {:.1} m", self.elevation_gain_m)?;
        writeln!(f, "Elevation loss:  {:.1} m", self.elevation_loss_m)?;
        write!(f, "Channels:        {}", self.channels_line())
    }
}

fn fmt_time(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "-".to_string(),
    }
}

fn format_duration(secs: f64) -> String {
    let total = secs.max(0.0).round() as i64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours}h {minutes:02}m {seconds:02}s")
    } else {
        format!("{minutes}m {seconds:02}s")
    }
}

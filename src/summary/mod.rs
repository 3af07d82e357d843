//! # Minute aggregation
//!
//! Groups a track's samples into fixed one-minute windows anchored at the
//! first timestamp and derives one [`MinuteSummary`] per window.
//!
//! A sample at elapsed time `e` (seconds since the first sample) belongs to
//! the window `floor(e / 60)`. All per-window quantities that need an
//! interval come from consecutive sample pairs inside the window:
//!
//! - elapsed time is the sum of pair time deltas,
//! - distance is the sum of pair distances, reconstructed per the track's
//!   [`DistanceSource`] (haversine between coordinates, or cumulative-field
//!   difference),
//! - net elevation change is the sum of pair elevation deltas.
//!
//! Windows holding fewer than two samples have no pair interval and are
//! dropped. Heart-rate and elevation means run over the readings actually
//! present in the window; an absent reading never counts as zero there.
//! Pace is elapsed time over distance, left at `0.0` when the window covered
//! no distance (rendered as `-` by [`format_pace`]).

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Serialize;

use crate::track::{DistanceSource, Sample, Track};

pub mod geodesic;
pub mod overview;
pub mod pace;

pub use overview::TrackOverview;
pub use pace::format_pace;

/// Meters per statute mile.
pub const METERS_PER_MILE: f64 = 1609.34;

/// Width of one aggregation window in milliseconds.
const WINDOW_MILLIS: i64 = 60_000;

/// Aggregated metrics for one minute of the recording.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinuteSummary {
    /// 1-based minute number within the recording
    pub minute: u32,
    /// Pace in seconds per kilometer; `0.0` when the window covered no distance
    pub pace_secs_per_km: f64,
    /// Pace in seconds per statute mile; `0.0` when the window covered no distance
    pub pace_secs_per_mi: f64,
    /// Mean of the heart-rate readings present in the window
    pub avg_heart_rate_bpm: Option<f64>,
    /// Mean of the elevation readings present in the window, one decimal
    pub avg_elevation_m: Option<f64>,
    /// Net elevation change over window distance, in percent, one decimal
    pub grade_percent: Option<f64>,
}

/// Derive one summary row per minute window holding at least two samples.
///
/// Rows come back in ascending minute order. An empty track yields an empty
/// vector.
pub fn summarize(track: &Track) -> Vec<MinuteSummary> {
    let source = track.distance_source();
    let mut rows = Vec::new();

    for (index, samples) in bucket_samples(track) {
        if samples.len() < 2 {
            debug!("dropping minute window {index}: only {} sample", samples.len());
            continue;
        }
        if index < 0 {
            // Only reachable when samples are timestamped before the first
            // point, i.e. the input was not in timestamp order.
            warn!(
                "dropping {} sample(s) timestamped before the first point",
                samples.len()
            );
            continue;
        }
        rows.push(summarize_window((index + 1) as u32, &samples, source));
    }

    debug!("derived {} minute rows from {} samples", rows.len(), track.len());
    rows
}

/// Group samples by Euclidean elapsed-minute index relative to the first
/// timestamp. `BTreeMap` keeps the windows in ascending order.
fn bucket_samples(track: &Track) -> BTreeMap<i64, Vec<&Sample>> {
    let mut buckets: BTreeMap<i64, Vec<&Sample>> = BTreeMap::new();
    let Some(start) = track.start_time() else {
        return buckets;
    };

    for sample in &track.samples {
        let elapsed_ms = sample.time.signed_duration_since(start).num_milliseconds();
        let index = elapsed_ms.div_euclid(WINDOW_MILLIS);
        buckets.entry(index).or_default().push(sample);
    }
    buckets
}

/// Fold one window's samples into a summary row.
fn summarize_window(minute: u32, samples: &[&Sample], source: DistanceSource) -> MinuteSummary {
    let mut distance_m = 0.0;
    let mut elapsed_secs = 0.0;
    let mut elevation_change_m = 0.0;

    for pair in samples.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        elapsed_secs +=
            curr.time.signed_duration_since(prev.time).num_milliseconds() as f64 / 1000.0;
        distance_m += pair_distance(prev, curr, source);
        // Absent elevation counts as zero for this delta only, never for
        // the mean below.
        elevation_change_m += curr.elevation_m.unwrap_or(0.0) - prev.elevation_m.unwrap_or(0.0);
    }

    let heart_rates: Vec<f64> = samples
        .iter()
        .filter_map(|s| s.heart_rate_bpm.map(f64::from))
        .collect();
    let elevations: Vec<f64> = samples.iter().filter_map(|s| s.elevation_m).collect();

    let (pace_secs_per_km, pace_secs_per_mi, grade_percent) = if distance_m > 0.0 {
        (
            elapsed_secs / (distance_m / 1000.0),
            elapsed_secs / (distance_m / METERS_PER_MILE),
            Some(round1(elevation_change_m / distance_m * 100.0)),
        )
    } else {
        (0.0, 0.0, None)
    };

    MinuteSummary {
        minute,
        pace_secs_per_km,
        pace_secs_per_mi,
        avg_heart_rate_bpm: mean(&heart_rates),
        avg_elevation_m: mean(&elevations).map(round1),
        grade_percent,
    }
}

/// Distance covered between two consecutive samples, in meters.
///
/// Pairs where either side lacks the needed datum contribute zero distance
/// while their time still accumulates. Negative cumulative-field deltas pass
/// through unclamped; the device field is occasionally non-monotonic.
fn pair_distance(prev: &Sample, curr: &Sample, source: DistanceSource) -> f64 {
    match source {
        DistanceSource::CumulativeField => {
            match (prev.cumulative_distance_m, curr.cumulative_distance_m) {
                (Some(a), Some(b)) => b - a,
                _ => 0.0,
            }
        }
        DistanceSource::Coordinates => match (prev.coordinate(), curr.coordinate()) {
            (Some((lat1, lon1)), Some((lat2, lon2))) => {
                geodesic::haversine_distance_m(lat1, lon1, lat2, lon2)
            }
            _ => 0.0,
        },
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

//! # Track ingestion
//!
//! Streaming readers for the two supported workout-recording schemas. Both
//! produce the same canonical output: an ordered list of [`Sample`]s plus the
//! distance-reconstruction strategy the summarizer should use.
//!
//! ## TCX structure (relevant subset)
//!
//! ```text
//! TrainingCenterDatabase
//! └── Activities / Activity / Lap / Track
//!     └── Trackpoint* (many)
//!         ├── Time             (required, RFC 3339)
//!         ├── DistanceMeters   (optional, cumulative)
//!         ├── AltitudeMeters   (optional)
//!         └── HeartRateBpm
//!             └── Value        (optional, nested one level deeper)
//! ```
//!
//! ## GPX structure (relevant subset)
//!
//! ```text
//! gpx
//! └── trk / trkseg
//!     └── trkpt* (many, lat/lon attributes)
//!         ├── time             (required, RFC 3339)
//!         ├── ele              (optional)
//!         └── extensions
//!             └── .../hr       (optional, found at any depth)
//! ```
//!
//! Points from every lap, track, and segment are collected in document
//! order. A document with zero track points is not an error; it yields an
//! empty track and, downstream, an empty summary. A missing or malformed
//! timestamp on any point is fatal, since elapsed-minute bucketing is
//! undefined without it.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, Utc};
use log::info;

mod error;
mod gpx;
mod helpers;
mod tcx;


pub use error::TrackError;

/// One recorded instant along the track.
///
/// Only the timestamp is guaranteed; every other channel is optional and an
/// absent reading is distinct from a zero reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Absolute timestamp of the reading
    pub time: DateTime<Utc>,
    /// Geodetic latitude in degrees (GPX)
    pub latitude: Option<f64>,
    /// Geodetic longitude in degrees (GPX)
    pub longitude: Option<f64>,
    /// Device-reported cumulative distance in meters (TCX)
    pub cumulative_distance_m: Option<f64>,
    /// Altitude in meters
    pub elevation_m: Option<f64>,
    /// Heart rate in beats per minute
    pub heart_rate_bpm: Option<u16>,
}

impl Sample {
    /// Create a sample with only a timestamp; all channels absent.
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            time,
            latitude: None,
            longitude: None,
            cumulative_distance_m: None,
            elevation_m: None,
            heart_rate_bpm: None,
        }
    }

    /// Both coordinates, when present, as `(latitude, longitude)` degrees.
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}

/// How inter-sample distance is reconstructed during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceSource {
    /// Difference of the device's cumulative `DistanceMeters` field (TCX)
    CumulativeField,
    /// Haversine distance between consecutive coordinate pairs (GPX)
    Coordinates,
}

/// Supported recording schemas, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFormat {
    /// Training Center XML (`.tcx`)
    Tcx,
    /// GPS Exchange Format (`.gpx`)
    Gpx,
}

impl TrackFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "tcx" => Some(TrackFormat::Tcx),
            "gpx" => Some(TrackFormat::Gpx),
            _ => None,
        }
    }

    /// The distance-reconstruction strategy this format implies.
    pub fn distance_source(self) -> DistanceSource {
        match self {
            TrackFormat::Tcx => DistanceSource::CumulativeField,
            TrackFormat::Gpx => DistanceSource::Coordinates,
        }
    }
}

impl fmt::Display for TrackFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackFormat::Tcx => write!(f, "TCX"),
            TrackFormat::Gpx => write!(f, "GPX"),
        }
    }
}

/// A parsed recording: samples in document order plus their source format.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Samples in document order (assumed non-decreasing in time)
    pub samples: Vec<Sample>,
    /// The schema the samples were read from
    pub format: TrackFormat,
}

impl Track {
    /// Distance-reconstruction strategy for the summarizer.
    pub fn distance_source(&self) -> DistanceSource {
        self.format.distance_source()
    }

    /// Timestamp of the first sample, the anchor for minute bucketing.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.samples.first().map(|s| s.time)
    }

    /// Timestamp of the last sample.
    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.samples.last().map(|s| s.time)
    }

    /// Number of samples in the track.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the track has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Read a track recording from a file, selecting the reader by extension.
pub fn read_track(path: &Path) -> Result<Track, TrackError> {
    let format = TrackFormat::from_path(path)
        .ok_or_else(|| TrackError::UnsupportedExtension(path.display().to_string()))?;

    let file = File::open(path)?;
    let track = read_track_from(format, BufReader::new(file))?;
    info!(
        "Parsed {} track points from {} ({})",
        track.len(),
        path.display(),
        format
    );
    Ok(track)
}

/// Read a track recording of a known format from any buffered reader.
pub fn read_track_from<R: BufRead>(format: TrackFormat, reader: R) -> Result<Track, TrackError> {
    let samples = match format {
        TrackFormat::Tcx => tcx::read(reader)?,
        TrackFormat::Gpx => gpx::read(reader)?,
    };
    Ok(Track { samples, format })
}

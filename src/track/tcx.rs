//! Streaming reader for Training Center XML (`.tcx`) recordings.
//!
//! Only the per-point channels the summarizer consumes are extracted:
//! `Time`, the cumulative `DistanceMeters`, `AltitudeMeters`, and the
//! nested `HeartRateBpm/Value`. Everything else (laps, cadence, creator
//! metadata, raw positions) is skipped without buffering the document.

use std::io::BufRead;

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

use super::error::TrackError;
use super::helpers::{parse_optional_f64, parse_optional_u16, parse_timestamp};
use super::Sample;

/// Text-bearing `Trackpoint` child currently being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Time,
    Distance,
    Altitude,
    HeartRate,
}

/// A `Trackpoint` under construction.
#[derive(Debug, Default)]
struct Pending {
    time: Option<DateTime<Utc>>,
    distance: Option<f64>,
    elevation: Option<f64>,
    heart_rate: Option<u16>,
}

impl Pending {
    fn into_sample(self, index: usize) -> Result<Sample, TrackError> {
        let time = self.time.ok_or(TrackError::MissingTimestamp { index })?;
        Ok(Sample {
            time,
            latitude: None,
            longitude: None,
            cumulative_distance_m: self.distance,
            elevation_m: self.elevation,
            heart_rate_bpm: self.heart_rate,
        })
    }
}

/// Collect every `Trackpoint` in document order, across all laps and tracks.
pub(super) fn read<R: BufRead>(reader: R) -> Result<Vec<Sample>, TrackError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut samples: Vec<Sample> = Vec::new();
    let mut buf = Vec::new();

    // The point under construction, which of its children we are inside,
    // and whether that child is wrapped in HeartRateBpm. `Value` is only
    // meaningful under HeartRateBpm; laps also carry a DistanceMeters
    // child, which the `current` guard keeps out of the capture.
    let mut current: Option<Pending> = None;
    let mut field: Option<Field> = None;
    let mut in_heart_rate = false;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"Trackpoint" => current = Some(Pending::default()),
                b"Time" if current.is_some() => field = Some(Field::Time),
                b"DistanceMeters" if current.is_some() => field = Some(Field::Distance),
                b"AltitudeMeters" if current.is_some() => field = Some(Field::Altitude),
                b"HeartRateBpm" if current.is_some() => in_heart_rate = true,
                b"Value" if in_heart_rate => field = Some(Field::HeartRate),
                _ => {}
            },
            Event::Empty(e) => {
                // A self-closing Trackpoint has no Time child.
                if e.local_name().as_ref() == b"Trackpoint" {
                    return Err(TrackError::MissingTimestamp {
                        index: samples.len(),
                    });
                }
            }
            Event::Text(t) => {
                if let (Some(point), Some(active)) = (current.as_mut(), field) {
                    let text = t.unescape()?;
                    let index = samples.len();
                    match active {
                        Field::Time => point.time = Some(parse_timestamp(&text, index)?),
                        Field::Distance => {
                            point.distance = parse_optional_f64(&text, "DistanceMeters", index)?;
                        }
                        Field::Altitude => {
                            point.elevation = parse_optional_f64(&text, "AltitudeMeters", index)?;
                        }
                        Field::HeartRate => {
                            point.heart_rate = parse_optional_u16(&text, "HeartRateBpm", index)?;
                        }
                    }
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"Trackpoint" => {
                    if let Some(point) = current.take() {
                        let sample = point.into_sample(samples.len())?;
                        samples.push(sample);
                    }
                    field = None;
                    in_heart_rate = false;
                }
                b"HeartRateBpm" => in_heart_rate = false,
                b"Time" | b"DistanceMeters" | b"AltitudeMeters" | b"Value" => field = None,
                _ => {}
            },
            Event::Eof => {
                if current.is_some() {
                    return Err(TrackError::InvalidStructure(
                        "document ended inside a Trackpoint".to_string(),
                    ));
                }
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(samples)
}

//! Streaming reader for GPS Exchange Format (`.gpx`) recordings.
//!
//! Coordinates come from the `lat`/`lon` attributes of each `trkpt`;
//! `time` and `ele` are direct children. Heart rate lives inside vendor
//! extension blocks whose namespace prefix varies by device, so any
//! element with local name `hr` found at any depth inside the point is
//! accepted. The `current` guard keeps the document-level `metadata/time`
//! out of the capture.

use std::io::BufRead;

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

use super::error::TrackError;
use super::helpers::{get_attribute, parse_optional_f64, parse_optional_u16, parse_timestamp};
use super::Sample;

/// Text-bearing `trkpt` descendant currently being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Time,
    Elevation,
    HeartRate,
}

/// A `trkpt` under construction.
#[derive(Debug, Default)]
struct Pending {
    time: Option<DateTime<Utc>>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    elevation: Option<f64>,
    heart_rate: Option<u16>,
}

impl Pending {
    fn into_sample(self, index: usize) -> Result<Sample, TrackError> {
        let time = self.time.ok_or(TrackError::MissingTimestamp { index })?;
        Ok(Sample {
            time,
            latitude: self.latitude,
            longitude: self.longitude,
            cumulative_distance_m: None,
            elevation_m: self.elevation,
            heart_rate_bpm: self.heart_rate,
        })
    }
}

/// Parse the `lat`/`lon` attributes of a `trkpt` start tag.
fn point_from_attributes(
    e: &quick_xml::events::BytesStart,
    index: usize,
) -> Result<Pending, TrackError> {
    let mut point = Pending::default();
    if let Some(lat) = get_attribute(e, "lat")? {
        point.latitude = parse_optional_f64(&lat, "lat", index)?;
    }
    if let Some(lon) = get_attribute(e, "lon")? {
        point.longitude = parse_optional_f64(&lon, "lon", index)?;
    }
    Ok(point)
}

/// Collect every `trkpt` in document order, across all tracks and segments.
pub(super) fn read<R: BufRead>(reader: R) -> Result<Vec<Sample>, TrackError> {
    let mut xml = Reader::from_reader(reader);
    xml.config_mut().trim_text(true);

    let mut samples: Vec<Sample> = Vec::new();
    let mut buf = Vec::new();

    let mut current: Option<Pending> = None;
    let mut field: Option<Field> = None;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"trkpt" => current = Some(point_from_attributes(&e, samples.len())?),
                b"time" if current.is_some() => field = Some(Field::Time),
                b"ele" if current.is_some() => field = Some(Field::Elevation),
                b"hr" if current.is_some() => field = Some(Field::HeartRate),
                _ => {}
            },
            Event::Empty(e) => {
                // A self-closing trkpt has no time child.
                if e.local_name().as_ref() == b"trkpt" {
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
                        Field::Elevation => {
                            point.elevation = parse_optional_f64(&text, "ele", index)?;
                        }
                        Field::HeartRate => {
                            point.heart_rate = parse_optional_u16(&text, "hr", index)?;
                        }
                    }
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"trkpt" => {
                    if let Some(point) = current.take() {
                        let sample = point.into_sample(samples.len())?;
                        samples.push(sample);
                    }
                    field = None;
                }
                b"time" | b"ele" | b"hr" => field = None,
                _ => {}
            },
            Event::Eof => {
                if current.is_some() {
                    return Err(TrackError::InvalidStructure(
                        "document ended inside a trkpt".to_string(),
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

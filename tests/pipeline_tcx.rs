//! Integration tests for the TCX pipeline
//!
//! These tests verify the full path from a TCX file on disk to minute rows,
//! with distance reconstructed from the device's cumulative DistanceMeters
//! field rather than from coordinates.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::fs;
use tempfile::tempdir;

use tracksplits::summary::{format_pace, summarize};
use tracksplits::track::{read_track, TrackError};

fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap()
}

/// Wrap one or more `<Lap>` blocks into a complete TCX document.
fn tcx_doc(laps: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities>
    <Activity Sport="Running">
      <Id>2024-05-01T06:00:00Z</Id>
{laps}
    </Activity>
  </Activities>
</TrainingCenterDatabase>
"#
    )
}

/// Wrap track points into a `<Lap>`. The lap-level DistanceMeters element
/// shares its name with the per-point one and must stay out of the samples.
fn tcx_lap(points: &str) -> String {
    format!(
        r#"      <Lap StartTime="2024-05-01T06:00:00Z">
        <TotalTimeSeconds>60.0</TotalTimeSeconds>
        <DistanceMeters>350.0</DistanceMeters>
        <Track>
{points}        </Track>
      </Lap>
"#
    )
}

/// One track point `secs` after the base time.
fn tcx_point(secs: i64, distance: Option<f64>, elevation: Option<f64>, hr: Option<u32>) -> String {
    let time = base_time() + Duration::seconds(secs);
    let mut point = format!(
        "          <Trackpoint>\n            <Time>{}</Time>\n",
        time.format("%Y-%m-%dT%H:%M:%SZ")
    );
    if let Some(meters) = elevation {
        point.push_str(&format!(
            "            <AltitudeMeters>{meters}</AltitudeMeters>\n"
        ));
    }
    if let Some(meters) = distance {
        point.push_str(&format!(
            "            <DistanceMeters>{meters}</DistanceMeters>\n"
        ));
    }
    if let Some(bpm) = hr {
        point.push_str(&format!(
            "            <HeartRateBpm><Value>{bpm}</Value></HeartRateBpm>\n"
        ));
    }
    point.push_str("          </Trackpoint>\n");
    point
}

/// Test the cumulative-distance pace math end to end
#[test]
fn test_cumulative_distance_to_pace() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("intervals.tcx");

    let points = [
        tcx_point(0, Some(0.0), None, None),
        tcx_point(20, Some(50.0), None, None),
        tcx_point(50, Some(140.0), None, None),
    ]
    .concat();
    fs::write(&path, tcx_doc(&tcx_lap(&points))).unwrap();

    let rows = summarize(&read_track(&path).unwrap());

    // 140 m over 50 s.
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].minute, 1);
    assert!((rows[0].pace_secs_per_km - 357.142_857).abs() < 1e-3);
    assert!((rows[0].pace_secs_per_mi - 574.764).abs() < 1e-2);
    assert_eq!(format_pace(rows[0].pace_secs_per_km), "5:57");
    assert_eq!(format_pace(rows[0].pace_secs_per_mi), "9:35");
}

/// Test heart-rate and elevation means plus grade over one window
#[test]
fn test_channel_means_and_grade() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hill.tcx");

    let points = [
        tcx_point(0, Some(0.0), Some(10.0), Some(140)),
        tcx_point(30, Some(60.0), Some(12.4), Some(150)),
    ]
    .concat();
    fs::write(&path, tcx_doc(&tcx_lap(&points))).unwrap();

    let rows = summarize(&read_track(&path).unwrap());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].avg_heart_rate_bpm, Some(145.0));
    assert_eq!(rows[0].avg_elevation_m, Some(11.2));
    // 2.4 m net rise over 60 m.
    assert_eq!(rows[0].grade_percent, Some(4.0));
}

/// Test that points from multiple laps merge in document order
#[test]
fn test_points_merge_across_laps() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("two_laps.tcx");

    let laps = format!(
        "{}{}",
        tcx_lap(&tcx_point(0, Some(0.0), None, None)),
        tcx_lap(&tcx_point(30, Some(100.0), None, None)),
    );
    fs::write(&path, tcx_doc(&laps)).unwrap();

    let track = read_track(&path).unwrap();
    assert_eq!(track.len(), 2);

    let rows = summarize(&track);
    assert_eq!(rows.len(), 1);
    assert_eq!(format_pace(rows[0].pace_secs_per_km), "5:00");
}

/// Test extension matching regardless of case
#[test]
fn test_uppercase_extension_is_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("INTERVALS.TCX");

    let points = [
        tcx_point(0, Some(0.0), None, None),
        tcx_point(30, Some(100.0), None, None),
    ]
    .concat();
    fs::write(&path, tcx_doc(&tcx_lap(&points))).unwrap();

    assert_eq!(read_track(&path).unwrap().len(), 2);
}

/// Test that a point without a timestamp fails with a typed error
#[test]
fn test_missing_time_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_time.tcx");

    let points = "          <Trackpoint>\n            <DistanceMeters>10.0</DistanceMeters>\n          </Trackpoint>\n";
    fs::write(&path, tcx_doc(&tcx_lap(points))).unwrap();

    let err = read_track(&path).unwrap_err();
    assert!(matches!(err, TrackError::MissingTimestamp { index: 0 }));
}

/// Test that garbage in a numeric element fails with the element name
#[test]
fn test_garbage_distance_is_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.tcx");

    let points = "          <Trackpoint>\n            <Time>2024-05-01T06:00:00Z</Time>\n            <DistanceMeters>fast</DistanceMeters>\n          </Trackpoint>\n";
    fs::write(&path, tcx_doc(&tcx_lap(points))).unwrap();

    let err = read_track(&path).unwrap_err();
    assert!(matches!(
        err,
        TrackError::InvalidValue {
            element: "DistanceMeters",
            ..
        }
    ));
}

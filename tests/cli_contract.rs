//! Tests for the surfaces the command-line interface composes
//!
//! The binary wires files into [`read_track`], rows into [`SplitsTable`],
//! and exports into [`write_csv`]/[`write_json`]. These tests pin down that
//! contract: the rendered text, the export file shapes, and the typed
//! errors the commands translate into messages.

use std::fs;
use tempfile::tempdir;

use tracksplits::report::{write_csv, write_json, SplitsTable};
use tracksplits::summary::{summarize, MinuteSummary, TrackOverview};
use tracksplits::track::{read_track, TrackError};

const INTERVALS_TCX: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
  <Activities>
    <Activity Sport="Running">
      <Id>2024-05-01T06:00:00Z</Id>
      <Lap StartTime="2024-05-01T06:00:00Z">
        <Track>
          <Trackpoint>
            <Time>2024-05-01T06:00:00Z</Time>
            <AltitudeMeters>10.0</AltitudeMeters>
            <DistanceMeters>0.0</DistanceMeters>
            <HeartRateBpm><Value>140</Value></HeartRateBpm>
          </Trackpoint>
          <Trackpoint>
            <Time>2024-05-01T06:00:20Z</Time>
            <AltitudeMeters>11.0</AltitudeMeters>
            <DistanceMeters>50.0</DistanceMeters>
            <HeartRateBpm><Value>145</Value></HeartRateBpm>
          </Trackpoint>
          <Trackpoint>
            <Time>2024-05-01T06:00:50Z</Time>
            <AltitudeMeters>12.0</AltitudeMeters>
            <DistanceMeters>140.0</DistanceMeters>
            <HeartRateBpm><Value>150</Value></HeartRateBpm>
          </Trackpoint>
        </Track>
      </Lap>
    </Activity>
  </Activities>
</TrainingCenterDatabase>
"#;

fn export_rows() -> Vec<MinuteSummary> {
    vec![
        MinuteSummary {
            minute: 1,
            pace_secs_per_km: 300.0,
            pace_secs_per_mi: 482.8,
            avg_heart_rate_bpm: Some(150.0),
            avg_elevation_m: Some(10.0),
            grade_percent: Some(1.5),
        },
        MinuteSummary {
            minute: 2,
            pace_secs_per_km: 0.0,
            pace_secs_per_mi: 0.0,
            avg_heart_rate_bpm: None,
            avg_elevation_m: None,
            grade_percent: None,
        },
    ]
}

/// Test the file-to-table path the `minutes` command runs
#[test]
fn test_table_shows_formatted_paces() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("intervals.tcx");
    fs::write(&path, INTERVALS_TCX).unwrap();

    let rows = summarize(&read_track(&path).unwrap());
    let text = SplitsTable::new(&rows).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Minute"));
    assert!(lines[0].contains("Pace/km"));
    assert!(lines[0].contains("Grade (%)"));
    assert!(lines[1].contains("5:57"));
    assert!(lines[1].contains("145"));
}

/// Test that the colored rendering carries the same content
#[test]
fn test_colored_rendering_keeps_the_content() {
    let rows = export_rows();
    let table = SplitsTable::new(&rows);
    let colored = table.format_colored();

    assert!(colored.contains("Pace/km"));
    assert!(colored.contains("5:00"));
    // The plain form is the no-escape-codes contract.
    assert!(!table.to_string().contains('\x1b'));
}

/// Test the CSV export shape: header row, raw values, empty cells for absent
#[test]
fn test_csv_export_cells() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("splits.csv");

    write_csv(&path, &export_rows()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "minute,pace_secs_per_km,pace_secs_per_mi,avg_heart_rate_bpm,avg_elevation_m,grade_percent"
    );
    assert_eq!(lines[1], "1,300.0,482.8,150.0,10.0,1.5");
    assert_eq!(lines[2], "2,0.0,0.0,,,");
    assert_eq!(lines.len(), 3);
}

/// Test the JSON export shape: array of records, nulls for absent readings
#[test]
fn test_json_export_nulls_absent_readings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("splits.json");

    write_json(&path, &export_rows()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let records = parsed.as_array().unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["minute"], 1);
    assert_eq!(records[0]["pace_secs_per_km"].as_f64(), Some(300.0));
    assert_eq!(records[0]["grade_percent"].as_f64(), Some(1.5));
    assert!(records[1]["avg_heart_rate_bpm"].is_null());
    assert!(records[1]["grade_percent"].is_null());
}

/// Test the overview the `info` command prints
#[test]
fn test_overview_reports_channels_and_distance() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("intervals.tcx");
    fs::write(&path, INTERVALS_TCX).unwrap();

    let overview = TrackOverview::from_track(&read_track(&path).unwrap());
    let text = overview.to_string();

    assert!(text.contains("Format:          TCX"));
    assert!(text.contains("Track points:    3"));
    assert!(text.contains("Duration:        0m 50s"));
    assert!(text.contains("Total distance:  0.14 km"));
    assert!(text.contains("cumulative distance, elevation, heart rate"));
}

/// Test that an unknown extension is rejected before any file I/O
#[test]
fn test_unknown_extension_is_reported_before_io() {
    let dir = tempdir().unwrap();
    // Never created; the extension check must fire first.
    let path = dir.path().join("cadence.fit");

    let err = read_track(&path).unwrap_err();
    assert!(matches!(err, TrackError::UnsupportedExtension(_)));
}

/// Test that a missing recording surfaces as an I/O error
#[test]
fn test_missing_recording_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ghost.gpx");

    let err = read_track(&path).unwrap_err();
    assert!(matches!(err, TrackError::Io(_)));
}

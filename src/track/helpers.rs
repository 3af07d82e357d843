//! Shared parsing helpers for the TCX and GPX readers.

use chrono::{DateTime, Utc};
use quick_xml::events::BytesStart;

use super::error::TrackError;

/// Extract a named attribute's value from a start tag.
pub(super) fn get_attribute(e: &BytesStart, name: &str) -> Result<Option<String>, TrackError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|e| TrackError::Xml(quick_xml::Error::from(e)))?;
        if attr.key.as_ref() == name.as_bytes() {
            let value = std::str::from_utf8(&attr.value)?.to_string();
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Parse an RFC 3339 timestamp, normalizing any offset to UTC.
pub(super) fn parse_timestamp(text: &str, index: usize) -> Result<DateTime<Utc>, TrackError> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| TrackError::InvalidTimestamp {
            index,
            value: text.trim().to_string(),
            source,
        })
}

/// Parse optional numeric text. Empty or whitespace-only content counts as
/// absent; non-numeric content is an error.
pub(super) fn parse_optional_f64(
    text: &str,
    element: &'static str,
    index: usize,
) -> Result<Option<f64>, TrackError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| TrackError::InvalidValue {
            element,
            value: trimmed.to_string(),
            index,
        })
}

/// Parse optional integer text with the same absence rule as
/// [`parse_optional_f64`].
pub(super) fn parse_optional_u16(
    text: &str,
    element: &'static str,
    index: usize,
) -> Result<Option<u16>, TrackError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u16>()
        .map(Some)
        .map_err(|_| TrackError::InvalidValue {
            element,
            value: trimmed.to_string(),
            index,
        })
}

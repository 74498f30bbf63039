//! Normalization helpers that reduce caller-supplied dates to day granularity.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer};

use crate::errors::RecurringError;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a calendar date, discarding any time-of-day component.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (`2025-06-02T10:30:00Z`), and naive
/// timestamps (`2025-06-02T10:30:00.000`).
pub fn parse_date(raw: &str) -> Result<NaiveDate, RecurringError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(timestamp.date());
    }
    Err(RecurringError::InvalidDate(raw.to_string()))
}

/// Serde hook for stored dates, so records written with full timestamps load as days.
pub fn deserialize_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(de::Error::custom)
}

/// Optional variant of [`deserialize_day`]; `null` stays `None`.
pub fn deserialize_optional_day<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| parse_date(&raw))
        .transpose()
        .map_err(de::Error::custom)
}

/// Renders a date as `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

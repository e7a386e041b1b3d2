//! Booking date normalization
//!
//! Booking dates are entered as calendar dates but sent as full timestamps.
//! A date-only value means midnight UTC of that day. Values that already carry
//! a time are accepted too: without an offset they are taken as UTC, with an
//! offset they are converted to UTC. Empty input stays empty.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use common::ValidationError;

const NAIVE_DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Normalize one booking date to `YYYY-MM-DDTHH:MM:SS.sssZ`
///
/// `field` names the input in the error returned for unparseable values.
pub fn normalize_booking_date(field: &'static str, input: &str) -> Result<String, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(String::new());
    }

    parse_as_utc(input)
        .map(|instant| instant.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or_else(|| {
            ValidationError::new(
                field,
                format!("Invalid date '{input}', expected YYYY-MM-DD"),
            )
        })
}

fn parse_as_utc(input: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc());
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Some(instant.with_timezone(&Utc));
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| naive.and_utc())
}

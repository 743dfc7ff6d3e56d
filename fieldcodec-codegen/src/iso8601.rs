//! Host-side reference of the ISO-8601 wire format.
//!
//! [`DateTimeHelper`](crate::DateTimeHelper) owns its wire format instead of
//! delegating to the target type. These functions reproduce that format on
//! the host so fixtures and default values can be checked against it:
//! - UTC values render with a `Z` suffix;
//! - millisecond precision, widened to microseconds when sub-millisecond
//!   digits are present;
//! - years 0..=9999 use four digits, other years a sign and six digits
//!   (`+010000`, `-000001`).
//!
//! The target type has microsecond resolution, so nanoseconds below one
//! microsecond are truncated when formatting.

use crate::error::CodegenError;
use chrono::{DateTime, Datelike, Timelike, Utc};

const EXTENDED_YEAR_DIGITS: usize = 6;

/// Formats a UTC timestamp the way the generated serializer does.
#[must_use]
pub fn format_utc(value: &DateTime<Utc>) -> String {
    let year = value.year();
    let year = if (0..=9999).contains(&year) {
        format!("{:04}", year)
    } else {
        let sign = if year < 0 { '-' } else { '+' };
        format!("{}{:06}", sign, year.unsigned_abs())
    };

    let micros = value.nanosecond() / 1_000;
    let fraction = if micros % 1_000 == 0 { "%.3f" } else { "%.6f" };
    let pattern = format!("-%m-%dT%H:%M:%S{}Z", fraction);
    format!("{}{}", year, value.format(&pattern))
}

/// Parses an ISO-8601 timestamp with an explicit offset, normalised to UTC.
///
/// Accepts RFC 3339 timestamps and the signed six-digit year form produced
/// by [`format_utc`] for years outside 0..=9999.
///
/// # Errors
/// Returns `CodegenError::InvalidTimestamp` if `text` is not in the wire
/// format or names a day that does not exist.
pub fn parse(text: &str) -> Result<DateTime<Utc>, CodegenError> {
    match text.as_bytes().first() {
        Some(b'+' | b'-') => parse_extended(text),
        _ => DateTime::parse_from_rfc3339(text)
            .map(|value| value.with_timezone(&Utc))
            .map_err(|e| CodegenError::invalid_timestamp(text, e.to_string())),
    }
}

fn parse_extended(text: &str) -> Result<DateTime<Utc>, CodegenError> {
    let digits = text
        .get(1..=EXTENDED_YEAR_DIGITS)
        .filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| CodegenError::invalid_timestamp(text, "expected a signed six-digit year"))?;
    let year: i32 = digits
        .parse()
        .map_err(|_| CodegenError::invalid_timestamp(text, "year out of range"))?;
    let year = if text.starts_with('-') { -year } else { year };

    // 2000 is a leap year, so February 29 survives until the real year is set.
    let rest = &text[1 + EXTENDED_YEAR_DIGITS..];
    let placeholder = DateTime::parse_from_rfc3339(&format!("2000{}", rest))
        .map_err(|e| CodegenError::invalid_timestamp(text, e.to_string()))?;
    let local = placeholder
        .naive_local()
        .with_year(year)
        .ok_or_else(|| CodegenError::invalid_timestamp(text, "day does not exist in that year"))?;

    local
        .and_local_timezone(*placeholder.offset())
        .single()
        .map(|value| value.with_timezone(&Utc))
        .ok_or_else(|| CodegenError::invalid_timestamp(text, "year out of range"))
}

//! Opening-hours checks on wall-clock times of day.

use chrono::NaiveTime;

/// Whether a business with window `start..end` is open at `now`.
///
/// When `start` is after `end` the window crosses midnight and is open from
/// `start` to the end of the day and from midnight to `end`. Both boundary
/// instants count as closed.
#[must_use]
pub fn is_open_at(start: NaiveTime, end: NaiveTime, now: NaiveTime) -> bool {
    if start > end {
        now > start || now < end
    } else {
        now > start && now < end
    }
}

/// Parse a time of day written as `HH:MM` or `HH:MM:SS`.
///
/// # Errors
///
/// Returns [`chrono::ParseError`] when neither form matches.
pub fn parse_time_of_day(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M").or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
}

//! Time utilities: parsing 12-hour clock strings, formatting "now", validation.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime};

/// Format used when the tool stamps a new event ("09:05:03 AM").
pub const CLOCK_FORMAT: &str = "%I:%M:%S %p";

const SHORT_CLOCK_FORMAT: &str = "%I:%M %p";

/// Parse "H:MM:SS AM|PM" or "H:MM AM|PM" (seconds default to 0).
///
/// 12 AM is midnight and 12 PM is noon; hours outside 1..=12 are rejected.
pub fn parse_clock_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    if t.is_empty() {
        return None;
    }
    NaiveTime::parse_from_str(t, CLOCK_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(t, SHORT_CLOCK_FORMAT))
        .ok()
}

pub fn format_clock_time(t: NaiveTime) -> String {
    t.format(CLOCK_FORMAT).to_string()
}

/// Current local wall-clock time in the stored format.
pub fn now_clock() -> String {
    format_clock_time(Local::now().time())
}

/// Validate operator input and normalize it to the stored format.
pub fn normalize_clock_time(input: &str) -> AppResult<String> {
    parse_clock_time(input)
        .map(format_clock_time)
        .ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| normalize_clock_time(s)).transpose()
}

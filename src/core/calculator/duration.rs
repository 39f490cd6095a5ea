//! Elapsed time between an exit and the following entry.

use crate::models::duration::DurationLabel;
use crate::utils::time::parse_clock_time;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Forward elapsed seconds from `exit` to `entry`, both clock strings.
///
/// An entry earlier on the clock than the exit is taken to be after
/// midnight of the same logical day, so one day is added. Returns
/// `None` if either side is missing or does not parse.
pub fn elapsed_seconds(exit: Option<&str>, entry: Option<&str>) -> Option<i64> {
    let exit = parse_clock_time(exit?)?;
    let entry = parse_clock_time(entry?)?;

    let mut diff = (entry - exit).num_seconds();
    if diff < 0 {
        diff += SECONDS_PER_DAY;
    }
    Some(diff)
}

/// Duration label for an exit/entry pair. Total: never fails.
pub fn duration(exit: Option<&str>, entry: Option<&str>) -> DurationLabel {
    match elapsed_seconds(exit, entry) {
        Some(secs) => DurationLabel::from_minutes(secs / 60),
        None => DurationLabel::NotAvailable,
    }
}

use crate::models::duration::DurationLabel;
use crate::models::status::Status;

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// OUT → red, IN → green, anything else grey.
pub fn color_for_status(status: &Status) -> &'static str {
    match status {
        Status::Out => RED,
        Status::In => GREEN,
        Status::Unknown(_) => GREY,
    }
}

/// Still Out → yellow, N/A → grey, elapsed → reset.
pub fn color_for_duration(d: &DurationLabel) -> &'static str {
    match d {
        DurationLabel::StillOut => YELLOW,
        DurationLabel::NotAvailable => GREY,
        _ => RESET,
    }
}

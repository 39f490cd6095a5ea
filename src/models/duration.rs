use serde::Serialize;
use std::fmt;

/// Display label for the time a student spent outside.
///
/// Durations are only ever shown, never summed, so the label is the
/// whole contract: `"1h 5m"`, `"2h"`, `"45m"`, `"< 1m"`, `"Still Out"`
/// or `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum DurationLabel {
    Elapsed { hours: i64, minutes: i64 },
    UnderOneMinute,
    StillOut,
    NotAvailable,
}

impl DurationLabel {
    /// Build the label from whole elapsed minutes.
    pub fn from_minutes(total: i64) -> Self {
        if total <= 0 {
            return Self::UnderOneMinute;
        }
        Self::Elapsed {
            hours: total / 60,
            minutes: total % 60,
        }
    }

    pub fn is_still_out(&self) -> bool {
        matches!(self, Self::StillOut)
    }
}

impl fmt::Display for DurationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Elapsed { hours, minutes } if hours > 0 && minutes > 0 => {
                write!(f, "{hours}h {minutes}m")
            }
            Self::Elapsed { hours, .. } if hours > 0 => write!(f, "{hours}h"),
            Self::Elapsed { minutes, .. } => write!(f, "{minutes}m"),
            Self::UnderOneMinute => f.write_str("< 1m"),
            Self::StillOut => f.write_str("Still Out"),
            Self::NotAvailable => f.write_str("N/A"),
        }
    }
}

impl From<DurationLabel> for String {
    fn from(d: DurationLabel) -> Self {
        d.to_string()
    }
}

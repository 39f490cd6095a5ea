use super::duration::DurationLabel;
use super::event::AttendanceEvent;
use serde::Serialize;

/// Entry time shown for a session whose student has not come back yet.
pub const NO_ENTRY: &str = "-";

/// A reconciled exit/entry pair, or a lone exit.
///
/// Sessions are derived on every listing and never stored; `exit_id`
/// and `entry_id` point back at the records to edit or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub date: String,
    pub roll_no: String,
    pub name: String,
    pub exit_time: String,
    pub entry_time: String,
    pub duration: DurationLabel,
    pub exit_id: Option<i64>,
    pub entry_id: Option<i64>,
}

impl Session {
    pub fn matched(exit: &AttendanceEvent, entry: &AttendanceEvent, duration: DurationLabel) -> Self {
        Self {
            date: exit.date.clone(),
            roll_no: exit.roll_no.clone(),
            name: exit.name.clone(),
            exit_time: exit.time.clone(),
            entry_time: entry.time.clone(),
            duration,
            exit_id: exit.id,
            entry_id: entry.id,
        }
    }

    pub fn still_out(exit: &AttendanceEvent) -> Self {
        Self {
            date: exit.date.clone(),
            roll_no: exit.roll_no.clone(),
            name: exit.name.clone(),
            exit_time: exit.time.clone(),
            entry_time: NO_ENTRY.to_string(),
            duration: DurationLabel::StillOut,
            exit_id: exit.id,
            entry_id: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.entry_id.is_none() && self.duration.is_still_out()
    }
}

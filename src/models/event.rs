use super::status::Status;
use serde::{Deserialize, Serialize};

/// One recorded IN or OUT for a student on a logical date.
///
/// `date` and `time` are kept as the strings the operator (or another
/// tool) wrote, so a malformed value still flows through reconciliation
/// and degrades to `N/A` instead of failing the whole listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEvent {
    #[serde(default)]
    pub id: Option<i64>, // ⇔ logs.id, None until persisted
    pub date: String, // ⇔ logs.date (TEXT "YYYY-MM-DD")
    pub roll_no: String, // ⇔ logs.roll_no
    pub name: String, // ⇔ logs.name (copy of the roster name)
    #[serde(default)]
    pub batch: String, // ⇔ logs.batch
    pub time: String, // ⇔ logs.time (TEXT "HH:MM:SS AM")
    pub status: Status, // ⇔ logs.status ('IN' | 'OUT')
    #[serde(default)]
    pub created_at: String, // ⇔ logs.created_at (ISO8601)
}

impl AttendanceEvent {
    /// Key used to group events into the same exit/entry bucket.
    pub fn key(&self) -> (&str, &str) {
        (self.date.as_str(), self.roll_no.as_str())
    }
}

/// An event that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub date: String,
    pub roll_no: String,
    pub name: String,
    pub batch: String,
    pub time: String,
    pub status: Status,
}

impl NewEvent {
    /// View the pending event the same way stored ones are viewed
    /// (no id, no creation stamp).
    pub fn to_event(&self) -> AttendanceEvent {
        AttendanceEvent {
            id: None,
            date: self.date.clone(),
            roll_no: self.roll_no.clone(),
            name: self.name.clone(),
            batch: self.batch.clone(),
            time: self.time.clone(),
            status: self.status.clone(),
            created_at: String::new(),
        }
    }
}

/// Partial update applied by `edit`. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    pub date: Option<String>,
    pub time: Option<String>,
    pub status: Option<Status>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.time.is_none() && self.status.is_none()
    }
}

use crate::db::store::{LogStore, SqliteLogStore};
use crate::errors::{AppError, AppResult};
use crate::models::event::{AttendanceEvent, EventPatch};
use crate::models::status::Status;
use crate::utils::date::resolve_date;
use crate::utils::time::parse_optional_time;

pub struct EditLogic;

impl EditLogic {
    /// Validate raw `--date/--time/--status` input into a patch.
    pub fn build_patch(
        date: Option<&String>,
        time: Option<&String>,
        status: Option<&String>,
    ) -> AppResult<EventPatch> {
        let patch = EventPatch {
            date: date.map(|d| resolve_date(Some(d))).transpose()?,
            time: parse_optional_time(time)?,
            status: status
                .map(|s| Status::parse(s).ok_or_else(|| AppError::InvalidStatus(s.to_string())))
                .transpose()?,
        };

        if patch.is_empty() {
            return Err(AppError::NothingToUpdate);
        }
        Ok(patch)
    }

    /// Apply `patch` to log `id` and return the record as it was and as it is now.
    pub fn apply(
        store: &SqliteLogStore,
        id: i64,
        patch: &EventPatch,
    ) -> AppResult<(AttendanceEvent, AttendanceEvent)> {
        let before = store.get(id)?.ok_or(AppError::LogNotFound(id))?;
        store.update(id, patch)?;
        let after = store.get(id)?.ok_or(AppError::LogNotFound(id))?;
        Ok((before, after))
    }
}

use crate::db::audit;
use crate::db::store::SqliteLogStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::AttendanceEvent;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Ids behind a session, exit first, each at most once.
    /// Errors when there is nothing to delete.
    pub fn targets(exit_id: Option<i64>, entry_id: Option<i64>) -> AppResult<Vec<i64>> {
        let mut ids: Vec<i64> = [exit_id, entry_id].into_iter().flatten().collect();
        ids.dedup();
        if ids.is_empty() {
            return Err(AppError::NothingToDelete);
        }
        Ok(ids)
    }

    /// Load the records about to be deleted, failing on any unknown id.
    pub fn preview(store: &SqliteLogStore, ids: &[i64]) -> AppResult<Vec<AttendanceEvent>> {
        ids.iter()
            .map(|&id| store.get(id)?.ok_or(AppError::LogNotFound(id)))
            .collect()
    }

    /// Delete the previewed records and write one `del` audit row for each,
    /// all or nothing.
    pub fn apply(store: &SqliteLogStore, records: &[AttendanceEvent]) -> AppResult<usize> {
        let ids: Vec<i64> = records.iter().filter_map(|r| r.id).collect();

        store.delete_batch(&ids, |conn, id| {
            let Some(r) = records.iter().find(|r| r.id == Some(id)) else {
                return Err(AppError::LogNotFound(id));
            };
            audit::ttlog(
                conn,
                "del",
                &r.roll_no,
                &format!(
                    "Deleted log #{} ({} {} {} {})",
                    id,
                    r.name,
                    r.status.as_str(),
                    r.date,
                    r.time
                ),
            )
        })
    }
}

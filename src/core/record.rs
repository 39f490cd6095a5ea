use crate::core::fallback::FallbackFile;
use crate::core::roster::RosterLogic;
use crate::db::store::LogStore;
use crate::db::students::RosterLookup;
use crate::errors::{AppError, AppResult};
use crate::models::event::NewEvent;
use crate::models::status::Status;
use crate::models::student::Student;
use std::path::{Path, PathBuf};

/// Where a recorded event ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Stored(i64),
    SavedLocally { path: PathBuf, pending: usize },
}

/// High-level business logic for the `in` / `out` commands.
pub struct RecordLogic;

impl RecordLogic {
    /// Build the event for `roll_no`, filling name and batch from the roster.
    pub fn prepare<R: RosterLookup + ?Sized>(
        roster: &R,
        roll_no: &str,
        status: Status,
        date: String,
        time: String,
    ) -> AppResult<(Student, NewEvent)> {
        let roll_no = roll_no.trim();
        if roll_no.is_empty() {
            return Err(AppError::StudentNotFound(String::new()));
        }

        let student = roster
            .find(roll_no)?
            .ok_or_else(|| AppError::StudentNotFound(roll_no.to_string()))?;

        let ev = NewEvent {
            date,
            roll_no: student.roll_no.clone(),
            name: student.name.clone(),
            batch: student.batch.clone(),
            time,
            status,
        };
        Ok((student, ev))
    }

    /// Persist `ev`; if the store refuses it, keep it in the fallback file.
    ///
    /// Only a failure of the fallback itself is returned as an error.
    pub fn store<S: LogStore + ?Sized>(
        store: &S,
        fallback: &FallbackFile,
        ev: &NewEvent,
    ) -> AppResult<RecordOutcome> {
        match store.insert(ev) {
            Ok(id) => Ok(RecordOutcome::Stored(id)),
            Err(e) => {
                tracing::warn!(error = %e, roll_no = %ev.roll_no, "store rejected log, falling back");
                Self::save_locally(fallback, ev)
            }
        }
    }

    /// Keep `ev` in the fallback file only.
    pub fn save_locally(fallback: &FallbackFile, ev: &NewEvent) -> AppResult<RecordOutcome> {
        let pending = fallback.append(ev)?;
        Ok(RecordOutcome::SavedLocally {
            path: fallback.path().to_path_buf(),
            pending,
        })
    }

    /// Roster used when the database cannot be opened: the configured CSV
    /// file, if there is one.
    pub fn offline_roster(roster_file: Option<&Path>) -> AppResult<Option<Vec<Student>>> {
        match roster_file {
            Some(path) if path.exists() => Ok(Some(RosterLogic::read_csv(path)?)),
            _ => Ok(None),
        }
    }
}

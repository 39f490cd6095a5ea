use crate::db::students::Roster;
use crate::errors::{AppError, AppResult};
use crate::models::student::Student;
use std::path::Path;

pub struct RosterLogic;

impl RosterLogic {
    /// Read a roster CSV with a `rollNo,name[,batch]` header.
    /// Rows with an empty roll number or name are skipped.
    pub fn read_csv(path: &Path) -> AppResult<Vec<Student>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)?;

        let mut out = Vec::new();
        for (line, rec) in rdr.deserialize::<Student>().enumerate() {
            let student = rec?;
            if student.roll_no.is_empty() || student.name.is_empty() {
                tracing::warn!(line = line + 2, "skipping incomplete roster row");
                continue;
            }
            out.push(student);
        }
        Ok(out)
    }

    /// Upsert every student of a CSV file into the roster.
    pub fn import(roster: &Roster, path: &Path) -> AppResult<usize> {
        if !path.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("roster file not found: {}", path.display()),
            )));
        }
        let students = Self::read_csv(path)?;
        roster.bulk_upsert(&students)
    }

    /// Seed an empty roster from `path`. A populated roster is left alone.
    pub fn seed(roster: &Roster, path: &Path) -> AppResult<usize> {
        let students = Self::read_csv(path)?;
        roster.initialize_if_empty(&students)
    }
}

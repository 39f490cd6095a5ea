//! Roster storage (`students` table) and the lookup used when logging.

use crate::errors::AppResult;
use crate::models::student::Student;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Resolve a roll number to a roster entry.
pub trait RosterLookup {
    fn find(&self, roll_no: &str) -> AppResult<Option<Student>>;
}

/// A fixed in-memory roster.
impl RosterLookup for [Student] {
    fn find(&self, roll_no: &str) -> AppResult<Option<Student>> {
        let roll_no = roll_no.trim();
        Ok(self.iter().find(|s| s.roll_no == roll_no).cloned())
    }
}

/// Roster backed by the `students` table.
pub struct Roster<'a> {
    conn: &'a Connection,
}

fn map_student(row: &Row) -> rusqlite::Result<Student> {
    Ok(Student {
        roll_no: row.get("roll_no")?,
        name: row.get("name")?,
        batch: row.get("batch")?,
    })
}

fn upsert_with(conn: &Connection, student: &Student) -> rusqlite::Result<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO students (roll_no, name, batch, created_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(roll_no) DO UPDATE
            SET name = excluded.name,
                batch = excluded.batch,
                updated_at = ?4",
        params![student.roll_no.trim(), student.name.trim(), student.batch.trim(), now],
    )?;
    Ok(())
}

impl<'a> Roster<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    pub fn list(&self) -> AppResult<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT roll_no, name, batch FROM students ORDER BY roll_no ASC")?;
        let rows = stmt.query_map([], map_student)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn count(&self) -> AppResult<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?)
    }

    /// Insert or replace by roll number.
    pub fn upsert(&self, student: &Student) -> AppResult<()> {
        upsert_with(self.conn, student)?;
        Ok(())
    }

    /// Upsert every student in one transaction. Returns how many were written.
    pub fn bulk_upsert(&self, students: &[Student]) -> AppResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        for s in students {
            upsert_with(&tx, s)?;
        }
        tx.commit()?;
        Ok(students.len())
    }

    /// Seed the roster only when it is empty. Returns how many were inserted.
    pub fn initialize_if_empty(&self, students: &[Student]) -> AppResult<usize> {
        if self.count()? > 0 {
            tracing::debug!("roster already initialized");
            return Ok(0);
        }
        self.bulk_upsert(students)
    }
}

impl RosterLookup for Roster<'_> {
    fn find(&self, roll_no: &str) -> AppResult<Option<Student>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT roll_no, name, batch FROM students WHERE roll_no = ?1")?;
        Ok(stmt.query_row([roll_no.trim()], map_student).optional()?)
    }
}

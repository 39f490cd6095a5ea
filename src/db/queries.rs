//! Raw SQL access to the `logs` table.

use crate::errors::{AppError, AppResult};
use crate::models::event::{AttendanceEvent, EventPatch, NewEvent};
use crate::models::status::Status;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_LOGS: &str = "SELECT id, date, roll_no, name, batch, time, status, created_at FROM logs";

/// Snapshot order: newest first, ties broken by id.
/// Stamps are UTC so text order is time order.
const ORDER_NEWEST: &str = "ORDER BY created_at DESC, id DESC";

pub fn map_row(row: &Row) -> Result<AttendanceEvent> {
    let status: String = row.get("status")?;

    Ok(AttendanceEvent {
        id: Some(row.get("id")?),
        date: row.get("date")?,
        roll_no: row.get("roll_no")?,
        name: row.get("name")?,
        batch: row.get("batch")?,
        time: row.get("time")?,
        status: Status::from_db_str(&status),
        created_at: row.get("created_at")?,
    })
}

fn collect(conn: &Connection, sql: &str, args: impl rusqlite::Params) -> AppResult<Vec<AttendanceEvent>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_all(conn: &Connection) -> AppResult<Vec<AttendanceEvent>> {
    collect(conn, &format!("{SELECT_LOGS} {ORDER_NEWEST}"), [])
}

pub fn load_by_date(conn: &Connection, date: &str) -> AppResult<Vec<AttendanceEvent>> {
    collect(
        conn,
        &format!("{SELECT_LOGS} WHERE date = ?1 {ORDER_NEWEST}"),
        [date],
    )
}

pub fn load_by_roll(conn: &Connection, roll_no: &str) -> AppResult<Vec<AttendanceEvent>> {
    collect(
        conn,
        &format!("{SELECT_LOGS} WHERE roll_no = ?1 {ORDER_NEWEST}"),
        [roll_no.trim()],
    )
}

pub fn load_by_id(conn: &Connection, id: i64) -> AppResult<Option<AttendanceEvent>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_LOGS} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

/// Insert and return the new row id.
pub fn insert_log(conn: &Connection, ev: &NewEvent) -> AppResult<i64> {
    let now = Utc::now().to_rfc3339();

    conn.execute(
        "INSERT INTO logs (date, roll_no, name, batch, time, status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7)",
        params![
            ev.date,
            ev.roll_no,
            ev.name,
            ev.batch,
            ev.time,
            ev.status.as_str(),
            now,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite the fields present in `patch`.
pub fn update_log(conn: &Connection, id: i64, patch: &EventPatch) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE logs
         SET date = COALESCE(?1, date),
             time = COALESCE(?2, time),
             status = COALESCE(?3, status),
             updated_at = ?4
         WHERE id = ?5",
        params![
            patch.date,
            patch.time,
            patch.status.as_ref().map(Status::as_str),
            Utc::now().to_rfc3339(),
            id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::LogNotFound(id));
    }
    Ok(())
}

pub fn delete_log(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM logs WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::LogNotFound(id));
    }
    Ok(())
}

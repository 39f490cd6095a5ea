//! Unified application error type.
//! Everything outside the session reconciler (db, core logic, cli, config)
//! returns AppError so failures surface the same way on the command line.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM:SS AM/PM)")]
    InvalidTime(String),

    #[error("Invalid status: {0} (expected IN or OUT)")]
    InvalidStatus(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Student not found in roster: {0}")]
    StudentNotFound(String),

    #[error("Invalid roster entry: {0}")]
    InvalidStudent(String),

    #[error("Log not found: {0}")]
    LogNotFound(i64),

    #[error("No logs to delete")]
    NothingToDelete,

    #[error("Nothing to update: pass at least one of --date, --time, --status")]
    NothingToUpdate,

    // ---------------------------
    // Roster / serialization
    // ---------------------------
    #[error("Roster import error: {0}")]
    Roster(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;

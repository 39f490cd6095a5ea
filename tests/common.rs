#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rexitlog::models::event::AttendanceEvent;
use rexitlog::models::status::Status;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rxl() -> Command {
    cargo_bin_cmd!("rexitlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_{}_rexitlog.sqlite", name, std::process::id()));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize a DB and register a couple of students
pub fn init_db_with_roster(db_path: &str) {
    rxl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (roll, name, batch) in [("701", "Rahim Uddin", "B1"), ("702", "Karim Ali", "B2")] {
        rxl()
            .args(["--db", db_path, "roster", "add", roll, name, "--batch", batch])
            .assert()
            .success();
    }
}

/// A stored-looking event for pairing tests
pub fn ev(id: i64, date: &str, roll: &str, time: &str, status: Status) -> AttendanceEvent {
    AttendanceEvent {
        id: Some(id),
        date: date.to_string(),
        roll_no: roll.to_string(),
        name: format!("Student {}", roll),
        batch: "B1".to_string(),
        time: time.to_string(),
        status,
        created_at: String::new(),
    }
}

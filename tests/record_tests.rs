mod common;

use rexitlog::core::fallback::FallbackFile;
use rexitlog::core::record::{RecordLogic, RecordOutcome};
use rexitlog::db::pool::DbPool;
use rexitlog::db::store::{LogStore, SqliteLogStore, Subscription};
use rexitlog::errors::{AppError, AppResult};
use rexitlog::models::event::{EventPatch, NewEvent};
use rexitlog::models::status::Status;
use rexitlog::models::student::Student;

fn roster() -> Vec<Student> {
    vec![Student {
        roll_no: "701".into(),
        name: "Rahim Uddin".into(),
        batch: "B1".into(),
    }]
}

/// A store whose writes always fail, as when the database is unreachable.
struct OfflineStore;

impl LogStore for OfflineStore {
    fn fetch_all(&self) -> AppResult<Vec<rexitlog::models::event::AttendanceEvent>> {
        Ok(Vec::new())
    }
    fn subscribe(&self) -> AppResult<Subscription> {
        Err(AppError::Migration("offline".into()))
    }
    fn insert(&self, _: &NewEvent) -> AppResult<i64> {
        Err(AppError::Migration("offline".into()))
    }
    fn update(&self, id: i64, _: &EventPatch) -> AppResult<()> {
        Err(AppError::LogNotFound(id))
    }
    fn delete(&self, id: i64) -> AppResult<()> {
        Err(AppError::LogNotFound(id))
    }
}

#[test]
fn test_prepare_fills_name_and_batch() {
    let (student, ev) = RecordLogic::prepare(
        roster().as_slice(),
        " 701 ",
        Status::Out,
        "2025-03-14".into(),
        "10:00:00 AM".into(),
    )
    .unwrap();

    assert_eq!(student.name, "Rahim Uddin");
    assert_eq!(ev.roll_no, "701");
    assert_eq!(ev.name, "Rahim Uddin");
    assert_eq!(ev.batch, "B1");
    assert_eq!(ev.status, Status::Out);
}

#[test]
fn test_prepare_unknown_or_empty_roll() {
    let r = roster();
    let unknown = RecordLogic::prepare(
        r.as_slice(),
        "999",
        Status::In,
        "2025-03-14".into(),
        "10:00:00 AM".into(),
    );
    assert!(matches!(unknown, Err(AppError::StudentNotFound(roll)) if roll == "999"));

    let empty = RecordLogic::prepare(
        r.as_slice(),
        "   ",
        Status::In,
        "2025-03-14".into(),
        "10:00:00 AM".into(),
    );
    assert!(matches!(empty, Err(AppError::StudentNotFound(_))));
}

#[test]
fn test_store_persists_when_online() {
    let dir = tempfile::tempdir().unwrap();
    let fallback = FallbackFile::new(dir.path().join("pending.json"));
    let store = SqliteLogStore::new(DbPool::in_memory().unwrap()).unwrap();

    let (_, ev) = RecordLogic::prepare(
        roster().as_slice(),
        "701",
        Status::Out,
        "2025-03-14".into(),
        "10:00:00 AM".into(),
    )
    .unwrap();

    let outcome = RecordLogic::store(&store, &fallback, &ev).unwrap();
    assert!(matches!(outcome, RecordOutcome::Stored(_)));
    assert!(!fallback.path().exists());
    assert_eq!(store.fetch_all().unwrap().len(), 1);
}

#[test]
fn test_store_falls_back_when_offline() {
    let dir = tempfile::tempdir().unwrap();
    let fallback = FallbackFile::new(dir.path().join("nested").join("pending.json"));

    let (_, first) = RecordLogic::prepare(
        roster().as_slice(),
        "701",
        Status::Out,
        "2025-03-14".into(),
        "10:00:00 AM".into(),
    )
    .unwrap();
    let mut second = first.clone();
    second.status = Status::In;
    second.time = "10:20:00 AM".into();

    let outcome = RecordLogic::store(&OfflineStore, &fallback, &first).unwrap();
    assert_eq!(
        outcome,
        RecordOutcome::SavedLocally {
            path: fallback.path().to_path_buf(),
            pending: 1
        }
    );

    RecordLogic::store(&OfflineStore, &fallback, &second).unwrap();

    // newest first
    let pending = fallback.load().unwrap();
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].status, Status::In);
    assert_eq!(pending[1].status, Status::Out);

    assert_eq!(fallback.pending_for_date("2025-03-14").unwrap().len(), 2);
    assert!(fallback.pending_for_date("2025-03-15").unwrap().is_empty());
}

#[test]
fn test_fallback_missing_or_blank_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pending.json");

    let fallback = FallbackFile::new(&path);
    assert!(fallback.load().unwrap().is_empty());

    std::fs::write(&path, "  \n").unwrap();
    assert!(fallback.load().unwrap().is_empty());
}

#[test]
fn test_offline_roster_from_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.csv");
    std::fs::write(&path, "rollNo,name,batch\n701,Rahim Uddin,B1\n").unwrap();

    let students = RecordLogic::offline_roster(Some(path.as_path())).unwrap().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Rahim Uddin");

    assert!(RecordLogic::offline_roster(None).unwrap().is_none());
    let missing = dir.path().join("none.csv");
    assert!(RecordLogic::offline_roster(Some(missing.as_path())).unwrap().is_none());
}

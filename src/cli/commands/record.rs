use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::fallback::FallbackFile;
use crate::core::record::{RecordLogic, RecordOutcome};
use crate::db::audit;
use crate::db::store::SqliteLogStore;
use crate::db::students::Roster;
use crate::errors::AppResult;
use crate::models::event::NewEvent;
use crate::models::status::Status;
use crate::models::student::Student;
use crate::ui::messages::{success, warning};
use crate::utils::date::resolve_date;
use crate::utils::time::{normalize_clock_time, now_clock};

/// Log an exit (`out`) or an entry (`in`).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (roll, date, time, status) = match cmd {
        Commands::Out { roll, date, time } => (roll, date, time, Status::Out),
        Commands::In { roll, date, time } => (roll, date, time, Status::In),
        _ => return Ok(()),
    };

    //
    // 1. Resolve date / time (defaults: today, now)
    //
    let date = resolve_date(date.as_ref())?;
    let time = match time {
        Some(t) => normalize_clock_time(t)?,
        None => now_clock(),
    };

    let fallback = FallbackFile::new(cfg.fallback_path());

    //
    // 2. Roster lookup, then persist (or keep locally)
    //
    let store = match SqliteLogStore::open(&cfg.database) {
        Ok(store) => store,
        Err(e) => {
            // no database: the CSV roster can still name the student
            tracing::warn!(error = %e, database = %cfg.database, "database unavailable");
            let Some(students) = RecordLogic::offline_roster(cfg.roster_path().as_deref())? else {
                return Err(e);
            };
            let (student, ev) =
                RecordLogic::prepare(students.as_slice(), roll, status, date, time)?;
            let outcome = RecordLogic::save_locally(&fallback, &ev)?;
            report(&student, &ev, outcome, None);
            return Ok(());
        }
    };

    let (student, ev) =
        RecordLogic::prepare(&Roster::new(store.conn()), roll, status, date, time)?;
    let outcome = RecordLogic::store(&store, &fallback, &ev)?;
    report(&student, &ev, outcome, Some(&store));

    Ok(())
}

fn report(
    student: &Student,
    ev: &NewEvent,
    outcome: RecordOutcome,
    store: Option<&SqliteLogStore>,
) {
    let what = if ev.status.is_out() { "exit" } else { "entry" };

    match outcome {
        RecordOutcome::Stored(id) => {
            success(format!(
                "{} logged {} successfully at {} (#{})",
                student.name, what, ev.time, id
            ));
            if let Some(store) = store {
                audit::ttlog_quiet(
                    store.conn(),
                    &ev.status.as_str().to_lowercase(),
                    &student.roll_no,
                    &format!("{} {} on {} at {}", student.name, what, ev.date, ev.time),
                );
            }
        }
        RecordOutcome::SavedLocally { path, pending } => {
            warning("Error saving log. Please try again.");
            warning(format!(
                "Log saved locally (offline mode): {} ({} pending)",
                path.display(),
                pending
            ));
        }
    }
}

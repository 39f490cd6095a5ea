use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::MatchPolicy;
use crate::core::logic::Core;
use crate::db::store::{LogStore, SqliteLogStore, Snapshot};
use crate::errors::AppResult;
use crate::models::event::AttendanceEvent;
use crate::ui::messages::{header, info};
use crate::ui::render::sessions_table;
use crate::utils::date::resolve_date;
use std::time::Duration;

/// Follow the log: print the day's sessions now and again after every change,
/// whether made by this process or another one sharing the database.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch {
        date,
        count,
        policy,
    } = cmd
    {
        let date = resolve_date(date.as_ref())?;
        let policy = policy.unwrap_or(cfg.match_policy);
        let interval = Duration::from_secs(cfg.watch_interval_secs.max(1));

        let store = SqliteLogStore::open(&cfg.database)?;
        let feed = store.subscribe()?;

        let mut shown = 0u64;
        let mut pending = feed.latest();
        loop {
            if let Some(snapshot) = pending.take() {
                print_snapshot(&snapshot, &date, policy, &cfg.separator_char);
                shown += 1;
                if count.is_some_and(|c| shown >= c) {
                    break;
                }
            }

            store.poll_external_changes()?;
            pending = feed.next_timeout(interval);
        }
    }
    Ok(())
}

fn print_snapshot(
    snapshot: &Snapshot,
    date: &str,
    policy: MatchPolicy,
    separator: &str,
) {
    let day: Vec<AttendanceEvent> = snapshot.iter().filter(|e| e.date == date).cloned().collect();
    let sessions = Core::reconcile(&day, policy);

    header(format!("Sessions - {}", date));
    if sessions.is_empty() {
        info(format!("No sessions for {}", date));
    } else {
        print!("{}", sessions_table(&sessions, separator));
    }
}

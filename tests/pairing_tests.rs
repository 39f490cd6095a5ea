mod common;

use common::ev;
use rexitlog::core::calculator::{MatchPolicy, MatchStrategy, pair_sessions, pair_sessions_with};
use rexitlog::core::logic::Core;
use rexitlog::models::duration::DurationLabel;
use rexitlog::models::event::AttendanceEvent;
use rexitlog::models::session::NO_ENTRY;
use rexitlog::models::status::Status;
use std::collections::VecDeque;

const DAY: &str = "2025-03-14";

#[test]
fn test_one_exit_one_entry() {
    let events = vec![
        ev(2, DAY, "701", "10:30:00 AM", Status::In),
        ev(1, DAY, "701", "10:00:00 AM", Status::Out),
    ];

    let sessions = pair_sessions(&events);
    assert_eq!(sessions.len(), 1);

    let s = &sessions[0];
    assert_eq!(s.exit_id, Some(1));
    assert_eq!(s.entry_id, Some(2));
    assert_eq!(s.exit_time, "10:00:00 AM");
    assert_eq!(s.entry_time, "10:30:00 AM");
    assert_eq!(s.duration.to_string(), "30m");
    assert!(!s.is_open());
}

#[test]
fn test_exit_without_entry_is_still_out() {
    let events = vec![ev(1, DAY, "701", "10:00:00 AM", Status::Out)];

    let sessions = pair_sessions(&events);
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].duration, DurationLabel::StillOut);
    assert_eq!(sessions[0].entry_time, NO_ENTRY);
    assert_eq!(sessions[0].entry_id, None);
    assert!(sessions[0].is_open());
}

#[test]
fn test_two_exits_one_entry_first_available() {
    let events = vec![
        ev(1, DAY, "701", "09:00:00 AM", Status::Out),
        ev(2, DAY, "701", "11:00:00 AM", Status::Out),
        ev(3, DAY, "701", "11:10:00 AM", Status::In),
    ];

    let sessions = pair_sessions(&events);
    assert_eq!(sessions.len(), 2);

    let matched: Vec<_> = sessions.iter().filter(|s| !s.is_open()).collect();
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].exit_id, Some(1));
    assert_eq!(matched[0].entry_id, Some(3));
    assert_eq!(matched[0].duration.to_string(), "2h 10m");

    let open: Vec<_> = sessions.iter().filter(|s| s.is_open()).collect();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0].exit_id, Some(2));
}

#[test]
fn test_nearest_policy_picks_shortest_gap() {
    let events = vec![
        ev(1, DAY, "701", "09:00:00 AM", Status::Out),
        ev(2, DAY, "701", "11:00:00 AM", Status::Out),
        ev(3, DAY, "701", "11:10:00 AM", Status::In),
    ];

    let sessions = pair_sessions_with(&events, &MatchPolicy::Nearest);
    let matched = sessions.iter().find(|s| !s.is_open()).unwrap();
    assert_eq!(matched.exit_id, Some(2));
    assert_eq!(matched.duration.to_string(), "10m");

    let open = sessions.iter().find(|s| s.is_open()).unwrap();
    assert_eq!(open.exit_id, Some(1));
}

#[test]
fn test_entry_without_exit_is_dropped() {
    let events = vec![ev(1, DAY, "701", "10:00:00 AM", Status::In)];
    assert!(pair_sessions(&events).is_empty());
}

#[test]
fn test_different_students_and_days_never_pair() {
    let events = vec![
        ev(1, DAY, "701", "10:00:00 AM", Status::Out),
        ev(2, DAY, "702", "10:20:00 AM", Status::In),
        ev(3, "2025-03-15", "701", "10:30:00 AM", Status::In),
    ];

    let sessions = pair_sessions(&events);
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].is_open());
    assert_eq!(sessions[0].roll_no, "701");
}

#[test]
fn test_one_session_per_exit() {
    let events = vec![
        ev(1, DAY, "701", "08:00:00 AM", Status::Out),
        ev(2, DAY, "701", "08:30:00 AM", Status::In),
        ev(3, DAY, "702", "09:00:00 AM", Status::Out),
        ev(4, DAY, "701", "12:00:00 PM", Status::Out),
        ev(5, DAY, "702", "09:05:00 AM", Status::In),
        ev(6, DAY, "702", "09:06:00 AM", Status::In),
    ];

    let sessions = pair_sessions(&events);
    let exits = events.iter().filter(|e| e.status.is_out()).count();
    assert_eq!(sessions.len(), exits);

    // every entry id is used at most once
    let mut entry_ids: Vec<i64> = sessions.iter().filter_map(|s| s.entry_id).collect();
    entry_ids.sort_unstable();
    entry_ids.dedup();
    assert_eq!(entry_ids, vec![2, 5]);
}

#[test]
fn test_unknown_status_is_ignored() {
    let events = vec![
        ev(1, DAY, "701", "10:00:00 AM", Status::Out),
        ev(2, DAY, "701", "10:05:00 AM", Status::Unknown("LUNCH".into())),
    ];

    let sessions = pair_sessions(&events);
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].is_open());
}

#[test]
fn test_malformed_time_degrades_to_not_available() {
    let events = vec![
        ev(1, DAY, "701", "sometime", Status::Out),
        ev(2, DAY, "701", "10:05:00 AM", Status::In),
    ];

    let sessions = pair_sessions(&events);
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].duration, DurationLabel::NotAvailable);
    assert_eq!(sessions[0].entry_id, Some(2));
}

#[test]
fn test_pairing_is_deterministic_and_does_not_mutate_input() {
    let events = vec![
        ev(1, DAY, "701", "10:00:00 AM", Status::Out),
        ev(2, DAY, "702", "10:10:00 AM", Status::Out),
        ev(3, DAY, "701", "10:40:00 AM", Status::In),
    ];
    let before = events.clone();

    let first = pair_sessions(&events);
    let second = pair_sessions(&events);
    assert_eq!(first, second);
    assert_eq!(events, before);
}

#[test]
fn test_empty_input() {
    assert!(pair_sessions(&[]).is_empty());
}

/// Never closes anything: every exit stays out and every entry is dropped.
struct NeverMatch;

impl MatchStrategy for NeverMatch {
    fn select(&self, _: &VecDeque<&AttendanceEvent>, _: &AttendanceEvent) -> Option<usize> {
        None
    }
}

#[test]
fn test_custom_strategy() {
    let events = vec![
        ev(1, DAY, "701", "10:00:00 AM", Status::Out),
        ev(2, DAY, "701", "10:30:00 AM", Status::In),
    ];

    let sessions = pair_sessions_with(&events, &NeverMatch);
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].is_open());
}

#[test]
fn test_reconcile_sorts_newest_date_first() {
    let events = vec![
        ev(1, "2025-03-13", "701", "10:00:00 AM", Status::Out),
        ev(2, "2025-03-15", "701", "10:00:00 AM", Status::Out),
        ev(3, "2025-03-14", "701", "10:00:00 AM", Status::Out),
    ];

    let sessions = Core::reconcile(&events, MatchPolicy::FirstAvailable);
    let dates: Vec<&str> = sessions.iter().map(|s| s.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-03-15", "2025-03-14", "2025-03-13"]);
}

//! Pairs OUT events with the IN events that close them.
//!
//! Two passes over the input:
//! 1. every OUT is queued under its `(date, roll_no)` key, in input order;
//! 2. every IN, in input order, asks a [`MatchStrategy`] which pending
//!    exit of its key it closes, and that exit is dequeued.
//!
//! Exits still queued at the end become "Still Out" sessions. An IN with
//! nothing to close is dropped without producing a session. Events whose
//! status is neither IN nor OUT are ignored. The input is never mutated.

use crate::core::calculator::duration::{duration, elapsed_seconds};
use crate::models::event::AttendanceEvent;
use crate::models::session::Session;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// Chooses which pending exit an entry closes.
pub trait MatchStrategy {
    /// Index into `pending` of the exit closed by `entry`, or `None` to
    /// leave every exit pending (the entry is then dropped).
    fn select(
        &self,
        pending: &VecDeque<&AttendanceEvent>,
        entry: &AttendanceEvent,
    ) -> Option<usize>;
}

/// Built-in matching policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// First pending exit in collection order.
    #[default]
    FirstAvailable,
    /// Pending exit with the shortest forward gap to the entry.
    Nearest,
}

impl MatchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchPolicy::FirstAvailable => "first-available",
            MatchPolicy::Nearest => "nearest",
        }
    }
}

impl MatchStrategy for MatchPolicy {
    fn select(
        &self,
        pending: &VecDeque<&AttendanceEvent>,
        entry: &AttendanceEvent,
    ) -> Option<usize> {
        if pending.is_empty() {
            return None;
        }

        match self {
            MatchPolicy::FirstAvailable => Some(0),
            MatchPolicy::Nearest => {
                let nearest = pending
                    .iter()
                    .enumerate()
                    .filter_map(|(i, exit)| {
                        elapsed_seconds(Some(&exit.time), Some(&entry.time)).map(|s| (s, i))
                    })
                    // min_by_key keeps the first of equal gaps
                    .min_by_key(|(secs, _)| *secs)
                    .map(|(_, i)| i);

                nearest.or(Some(0))
            }
        }
    }
}

/// Pair events with the default first-available policy.
pub fn pair_sessions(events: &[AttendanceEvent]) -> Vec<Session> {
    pair_sessions_with(events, &MatchPolicy::FirstAvailable)
}

/// Pair events using `strategy` to resolve entries against pending exits.
///
/// Emits exactly one session per OUT event. Output order: matched
/// sessions in entry order, then leftover exits grouped by key.
pub fn pair_sessions_with<S>(events: &[AttendanceEvent], strategy: &S) -> Vec<Session>
where
    S: MatchStrategy + ?Sized,
{
    // -----------------------------
    // Index pending exits per key
    // -----------------------------
    let mut pending: BTreeMap<(&str, &str), VecDeque<&AttendanceEvent>> = BTreeMap::new();
    for exit in events.iter().filter(|e| e.status.is_out()) {
        pending.entry(exit.key()).or_default().push_back(exit);
    }

    // -----------------------------
    // Resolve entries
    // -----------------------------
    let mut sessions = Vec::with_capacity(pending.values().map(VecDeque::len).sum());

    for entry in events.iter().filter(|e| e.status.is_in()) {
        let Some(queue) = pending.get_mut(&entry.key()) else {
            continue;
        };

        let Some(exit) = strategy
            .select(queue, entry)
            .and_then(|idx| queue.remove(idx))
        else {
            continue;
        };

        sessions.push(Session::matched(
            exit,
            entry,
            duration(Some(&exit.time), Some(&entry.time)),
        ));
    }

    // -----------------------------
    // Whatever is left is still out
    // -----------------------------
    sessions.extend(pending.into_values().flatten().map(Session::still_out));

    sessions
}

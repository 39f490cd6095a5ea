use crate::core::calculator::{MatchPolicy, pair_sessions_with};
use crate::models::{event::AttendanceEvent, session::Session};

pub struct Core;

impl Core {
    /// Pair a snapshot into sessions, newest date first.
    ///
    /// The sort is stable: sessions of the same date keep pairing order.
    pub fn reconcile(events: &[AttendanceEvent], policy: MatchPolicy) -> Vec<Session> {
        let mut sessions = pair_sessions_with(events, &policy);
        sessions.sort_by(|a, b| b.date.cmp(&a.date));

        tracing::debug!(
            events = events.len(),
            sessions = sessions.len(),
            policy = policy.as_str(),
            "reconciled snapshot"
        );
        sessions
    }
}

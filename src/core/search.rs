use crate::core::calculator::MatchPolicy;
use crate::core::logic::Core;
use crate::db::store::LogStore;
use crate::errors::AppResult;
use crate::models::session::Session;

/// What the operator is looking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriteria {
    /// Substring of a name or roll number, any case.
    Text(String),
    /// Exact roll number.
    Roll(String),
    /// Logical date (YYYY-MM-DD).
    Date(String),
}

pub struct SearchLogic;

impl SearchLogic {
    /// Load the matching events and reconcile them into sessions,
    /// newest date first.
    pub fn run<S: LogStore + ?Sized>(
        store: &S,
        criteria: &SearchCriteria,
        policy: MatchPolicy,
    ) -> AppResult<Vec<Session>> {
        let events = match criteria {
            SearchCriteria::Text(q) => store.search(q)?,
            SearchCriteria::Roll(r) => store.fetch_by_student(r)?,
            SearchCriteria::Date(d) => store.fetch_by_date(d)?,
        };

        tracing::debug!(?criteria, matched = events.len(), "search");
        Ok(Core::reconcile(&events, policy))
    }
}

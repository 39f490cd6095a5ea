use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::search::{SearchCriteria, SearchLogic};
use crate::db::store::SqliteLogStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render::sessions_table;
use crate::utils::date::resolve_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Search {
        query,
        roll,
        date,
        policy,
        json,
    } = cmd
    {
        let criteria = if let Some(d) = date {
            Some(SearchCriteria::Date(resolve_date(Some(d))?))
        } else if let Some(r) = roll.as_deref().map(str::trim).filter(|r| !r.is_empty()) {
            Some(SearchCriteria::Roll(r.to_string()))
        } else {
            query
                .as_deref()
                .map(str::trim)
                .filter(|q| !q.is_empty())
                .map(|q| SearchCriteria::Text(q.to_string()))
        };

        let Some(criteria) = criteria else {
            if *json {
                println!("[]");
            } else {
                info("Nothing to search: pass a name, --roll or --date.");
            }
            return Ok(());
        };

        let store = SqliteLogStore::open(&cfg.database)?;
        let policy = policy.unwrap_or(cfg.match_policy);
        let sessions = SearchLogic::run(&store, &criteria, policy)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&sessions)?);
        } else if sessions.is_empty() {
            info("No sessions found.");
        } else {
            print!("{}", sessions_table(&sessions, &cfg.separator_char));
            let open = sessions.iter().filter(|s| s.is_open()).count();
            println!(
                "{} session(s), {} still out (policy: {})",
                sessions.len(),
                open,
                policy.as_str()
            );
        }
    }
    Ok(())
}

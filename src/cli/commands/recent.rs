use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::fallback::FallbackFile;
use crate::db::store::{LogStore, SqliteLogStore};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};
use crate::ui::render::{activity_table, pending_table};
use crate::utils::date::resolve_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Recent { date } = cmd {
        let date = resolve_date(date.as_ref())?;
        let store = SqliteLogStore::open(&cfg.database)?;
        let events = store.fetch_by_date(&date)?;

        header(format!("Activity - {}", date));
        if events.is_empty() {
            info(format!("No activity for {}", date));
        } else {
            print!("{}", activity_table(&events, &cfg.separator_char));
        }

        // events the database refused earlier are still shown, flagged
        let pending = FallbackFile::new(cfg.fallback_path()).pending_for_date(&date)?;
        if !pending.is_empty() {
            warning(format!(
                "{} event(s) saved locally and not yet in the database:",
                pending.len()
            ));
            print!("{}", pending_table(&pending, &cfg.separator_char));
        }
    }
    Ok(())
}

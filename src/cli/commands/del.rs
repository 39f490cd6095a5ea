use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::store::SqliteLogStore;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        exit_id,
        entry_id,
        force,
    } = cmd
    {
        let ids = DeleteLogic::targets(*exit_id, *entry_id)?;

        let store = SqliteLogStore::open(&cfg.database)?;
        let records = DeleteLogic::preview(&store, &ids)?;

        if !*force {
            let list = records
                .iter()
                .map(|r| {
                    format!(
                        "#{} {} {} {} at {}",
                        r.id.unwrap_or_default(),
                        r.name,
                        r.status.label().to_lowercase(),
                        r.date,
                        r.time
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");

            if !confirm(&format!("Delete {}? This action is irreversible.", list)) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let deleted = DeleteLogic::apply(&store, &records)?;
        for r in &records {
            info(format!("Deleted log #{}", r.id.unwrap_or_default()));
        }
        success(format!("{} record(s) deleted.", deleted));
    }
    Ok(())
}

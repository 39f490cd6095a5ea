use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::audit;
use crate::db::store::SqliteLogStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        time,
        status,
    } = cmd
    {
        // validate before touching the database
        let patch = EditLogic::build_patch(date.as_ref(), time.as_ref(), status.as_ref())?;

        let store = SqliteLogStore::open(&cfg.database)?;
        let (before, after) = EditLogic::apply(&store, *id, &patch)?;

        success(format!(
            "Log #{} updated: {} {} {} -> {} {} {}",
            id,
            before.date,
            before.time,
            before.status.as_str(),
            after.date,
            after.time,
            after.status.as_str()
        ));

        audit::ttlog(
            store.conn(),
            "edit",
            &after.roll_no,
            &format!(
                "Log #{} ({}): {} {} {} -> {} {} {}",
                id,
                after.name,
                before.date,
                before.time,
                before.status.as_str(),
                after.date,
                after.time,
                after.status.as_str()
            ),
        )?;
    }
    Ok(())
}

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::roster::RosterLogic;
use crate::db::audit;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::students::Roster;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the roster, from `roster_file`, when it is still empty
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rexitlog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database    : {}", &cfg.database);

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    success(format!("Database initialized at {}", &cfg.database));

    match cfg.roster_path() {
        Some(path) if path.exists() => {
            let inserted = RosterLogic::seed(&Roster::new(&pool.conn), &path)?;
            if inserted > 0 {
                success(format!("Roster seeded with {} students", inserted));
                audit::ttlog_quiet(
                    &pool.conn,
                    "roster_seed",
                    &path.to_string_lossy(),
                    &format!("Seeded {} students", inserted),
                );
            } else {
                info("Roster already initialized");
            }
        }
        Some(path) => warning(format!("Roster file not found: {}", path.display())),
        None => info("No roster file configured; add students with `rexitlog roster add`"),
    }

    audit::ttlog_quiet(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    );

    println!("🎉 rexitlog initialization completed!");
    Ok(())
}

use crate::cli::parser::{Commands, RosterAction};
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::roster::RosterLogic;
use crate::db::audit;
use crate::db::store::{LogStore, SqliteLogStore};
use crate::db::students::{Roster, RosterLookup};
use crate::errors::{AppError, AppResult};
use crate::models::student::Student;
use crate::ui::messages::{info, success};
use crate::ui::render::{roster_table, sessions_table};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Roster { action } = cmd else {
        return Ok(());
    };

    let store = SqliteLogStore::open(&cfg.database)?;
    let roster = Roster::new(store.conn());

    match action {
        RosterAction::List => {
            let students = roster.list()?;
            if students.is_empty() {
                info("The roster is empty.");
            } else {
                print!("{}", roster_table(&students, &cfg.separator_char));
                println!("{} student(s)", students.len());
            }
        }

        RosterAction::Show { roll } => {
            let student = roster
                .find(roll)?
                .ok_or_else(|| AppError::StudentNotFound(roll.trim().to_string()))?;
            print!(
                "{}",
                roster_table(std::slice::from_ref(&student), &cfg.separator_char)
            );

            let sessions = Core::reconcile(&store.fetch_by_student(roll)?, cfg.match_policy);
            if sessions.is_empty() {
                info("No activity recorded.");
            } else {
                print!("{}", sessions_table(&sessions, &cfg.separator_char));
            }
        }

        RosterAction::Add { roll, name, batch } => {
            let student = Student {
                roll_no: roll.trim().to_string(),
                name: name.trim().to_string(),
                batch: batch.trim().to_string(),
            };
            if student.roll_no.is_empty() || student.name.is_empty() {
                return Err(AppError::InvalidStudent(
                    "roll number and name are required".into(),
                ));
            }
            roster.upsert(&student)?;
            success(format!("Student {} ({}) saved", student.name, student.roll_no));
            audit::ttlog_quiet(
                store.conn(),
                "roster_add",
                &student.roll_no,
                &format!("{} [{}]", student.name, student.batch),
            );
        }

        RosterAction::Import { file } => {
            let path = expand_tilde(file);
            let imported = RosterLogic::import(&roster, &path)?;
            success(format!("Imported {} student(s) from {}", imported, path.display()));
            audit::ttlog_quiet(
                store.conn(),
                "roster_import",
                &path.to_string_lossy(),
                &format!("Imported {} students", imported),
            );
        }
    }

    Ok(())
}

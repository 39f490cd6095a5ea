use crate::db::audit::{AuditEntry, load_audit};
use crate::errors::AppResult;
use ansi_term::Colour;
use rusqlite::Connection;

const MAX_OP_WIDTH: usize = 60;

/// ANSI color for an audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "out" => Colour::Red,
        "in" => Colour::Green,
        "edit" => Colour::Yellow,
        "del" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        other if other.starts_with("roster_") => Colour::Blue,
        _ => Colour::White,
    }
}

/// "operation (target)" cut to `MAX_OP_WIDTH` visible characters.
fn op_target_text(entry: &AuditEntry) -> String {
    let text = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    if text.chars().count() > MAX_OP_WIDTH {
        let mut s: String = text.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        text
    }
}

pub struct AuditLogic;

impl AuditLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let entries = load_audit(conn)?;
        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let texts: Vec<String> = entries.iter().map(op_target_text).collect();

        let op_w = texts.iter().map(|t| t.chars().count()).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, text) in entries.iter().zip(&texts) {
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| entry.date.clone());

            // only the operation word is colored; padding uses visible width
            let colored = match text.split_once(' ') {
                Some((op, rest)) => format!(
                    "{} {}",
                    color_for_operation(&entry.operation).paint(op),
                    rest
                ),
                None => color_for_operation(&entry.operation)
                    .paint(text.as_str())
                    .to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(text.chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                date,
                colored,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

//! Human-readable views of events, sessions and the roster.

use crate::models::event::{AttendanceEvent, NewEvent};
use crate::models::session::Session;
use crate::models::student::Student;
use crate::utils::colors::{color_for_duration, color_for_status};
use crate::utils::table::{Cell, Table};

fn id_cell(id: Option<i64>) -> Cell {
    Cell::from(id.map(|i| i.to_string()).unwrap_or_else(|| "-".into()))
}

pub fn sessions_table(sessions: &[Session], separator: &str) -> String {
    let mut table = Table::new(
        &[
            "DATE", "ROLL", "NAME", "EXIT", "ENTRY", "DURATION", "EXIT ID", "ENTRY ID",
        ],
        separator,
    );

    for s in sessions {
        table.add_row(vec![
            Cell::from(s.date.as_str()),
            Cell::from(s.roll_no.as_str()),
            Cell::from(s.name.as_str()),
            Cell::from(s.exit_time.as_str()),
            Cell::from(s.entry_time.as_str()),
            Cell::colored(s.duration.to_string(), color_for_duration(&s.duration)),
            id_cell(s.exit_id),
            id_cell(s.entry_id),
        ]);
    }

    table.render()
}

/// The day's activity feed, in the order given (newest first).
pub fn activity_table(events: &[AttendanceEvent], separator: &str) -> String {
    let mut table = Table::new(&["ID", "TIME", "ROLL", "NAME", "BATCH", "STATUS"], separator);

    for ev in events {
        table.add_row(vec![
            id_cell(ev.id),
            Cell::from(ev.time.as_str()),
            Cell::from(ev.roll_no.as_str()),
            Cell::from(ev.name.as_str()),
            Cell::from(ev.batch.as_str()),
            Cell::colored(ev.status.label(), color_for_status(&ev.status)),
        ]);
    }

    table.render()
}

/// Events waiting in the local fallback file.
pub fn pending_table(events: &[NewEvent], separator: &str) -> String {
    let mut table = Table::new(&["DATE", "TIME", "ROLL", "NAME", "STATUS"], separator);

    for ev in events {
        table.add_row(vec![
            Cell::from(ev.date.as_str()),
            Cell::from(ev.time.as_str()),
            Cell::from(ev.roll_no.as_str()),
            Cell::from(ev.name.as_str()),
            Cell::colored(ev.status.label(), color_for_status(&ev.status)),
        ]);
    }

    table.render()
}

pub fn roster_table(students: &[Student], separator: &str) -> String {
    let mut table = Table::new(&["ROLL", "NAME", "BATCH"], separator);

    for s in students {
        table.add_row(vec![
            Cell::from(s.roll_no.as_str()),
            Cell::from(s.name.as_str()),
            Cell::from(s.batch.as_str()),
        ]);
    }

    table.render()
}

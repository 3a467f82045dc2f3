//! Subcommand implementations.
//!
//! Every command loads the roster file, applies exactly one core
//! operation, and saves back only if it mutated. An absent roster file is
//! an empty roster, so the first `add` works without setup.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

use markbook_core::model::Student;
use markbook_core::roster::Roster;

pub mod add;
pub mod delete;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod report;
pub mod reset;
pub mod search;
pub mod topper;

/// Load the roster file, treating a missing file as an empty roster.
pub fn load_roster(path: &Path) -> Result<Roster> {
    if path.exists() {
        markbook_core::codec::load_csv(path)
    } else {
        tracing::debug!(path = %path.display(), "roster file absent, starting empty");
        Ok(Roster::new())
    }
}

/// Persist the roster back to its file.
pub fn save_roster(roster: &Roster, path: &Path) -> Result<()> {
    markbook_core::codec::save_csv(roster, path)
}

/// Render students in the standard table layout.
pub fn student_table(students: &[Student]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Roll No.", "Name", "Marks 1", "Marks 2", "Marks 3", "Total", "Average", "Grade",
    ]);
    for st in students {
        table.add_row(vec![
            Cell::new(&st.roll),
            Cell::new(&st.name),
            Cell::new(st.marks[0]),
            Cell::new(st.marks[1]),
            Cell::new(st.marks[2]),
            Cell::new(st.total()),
            Cell::new(format!("{:.2}", st.average())),
            Cell::new(st.grade()),
        ]);
    }
    table
}

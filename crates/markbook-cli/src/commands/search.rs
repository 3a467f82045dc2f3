//! The `markbook search` command.

use std::path::Path;

use anyhow::Result;

use markbook_core::query::{self, SearchOutcome};

use super::{load_roster, student_table};

pub fn execute(roster_path: &Path, query: &str) -> Result<()> {
    let roster = load_roster(roster_path)?;

    match query::search(&roster, query) {
        SearchOutcome::NoQuery => {
            println!("No query provided. Type a roll number or name (or part of one) to search.");
        }
        SearchOutcome::Matches(hits) if hits.is_empty() => {
            println!("No matches for \"{}\".", query.trim());
        }
        SearchOutcome::Matches(hits) => {
            println!("{}", student_table(&hits));
            println!("{} match(es).", hits.len());
        }
    }
    Ok(())
}

//! The `markbook add` command.

use std::path::Path;

use anyhow::Result;

use markbook_core::parser;
use markbook_core::roster::UpsertOutcome;

use super::{load_roster, save_roster};

pub fn execute(roster_path: &Path, roll: &str, name: &str, marks: &[String]) -> Result<()> {
    anyhow::ensure!(marks.len() == 3, "expected exactly 3 marks");

    let student = parser::build_student(roll, name, &marks[0], &marks[1], &marks[2])?;
    let (roll, name) = (student.roll.clone(), student.name.clone());

    let mut roster = load_roster(roster_path)?;
    let outcome = roster.upsert(student);
    save_roster(&roster, roster_path)?;

    match outcome {
        UpsertOutcome::Added => println!("Added {roll} ({name})"),
        UpsertOutcome::Updated => println!("Updated {roll} ({name})"),
    }
    Ok(())
}

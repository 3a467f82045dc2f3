//! The `markbook topper` command.

use std::path::Path;

use anyhow::Result;

use markbook_core::query;

use super::load_roster;

pub fn execute(roster_path: &Path) -> Result<()> {
    let roster = load_roster(roster_path)?;
    let top = query::topper(&roster)?;

    println!(
        "Topper: {} ({}) | Average: {:.2} | Grade: {}",
        top.roll,
        top.name,
        top.average(),
        top.grade()
    );
    Ok(())
}

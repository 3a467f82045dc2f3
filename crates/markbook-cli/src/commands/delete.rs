//! The `markbook delete` command.

use std::path::Path;

use anyhow::Result;

use super::{load_roster, save_roster};

pub fn execute(roster_path: &Path, roll: &str) -> Result<()> {
    let mut roster = load_roster(roster_path)?;
    let removed = roster.delete(roll)?;
    save_roster(&roster, roster_path)?;

    println!("Deleted {} ({})", removed.roll, removed.name);
    Ok(())
}

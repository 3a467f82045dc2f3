//! The `markbook reset` command.

use std::path::Path;

use anyhow::Result;

use super::{load_roster, save_roster};

pub fn execute(roster_path: &Path, yes: bool) -> Result<()> {
    if !yes {
        println!("Reset removes ALL student records. Re-run with --yes to confirm.");
        return Ok(());
    }

    let mut roster = load_roster(roster_path)?;
    let removed = roster.len();
    roster.clear();
    save_roster(&roster, roster_path)?;

    println!("Removed {removed} record(s).");
    Ok(())
}

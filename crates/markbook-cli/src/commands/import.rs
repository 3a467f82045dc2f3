//! The `markbook import` command.

use std::path::Path;

use anyhow::Result;

use markbook_core::codec;

use super::save_roster;

/// Replace the roster wholesale from an external CSV.
///
/// The roster file is only rewritten after the whole input has parsed, so a
/// malformed file leaves the existing roster untouched.
pub fn execute(roster_path: &Path, input: &Path) -> Result<()> {
    let imported = codec::load_csv(input)?;
    save_roster(&imported, roster_path)?;

    println!(
        "Imported {} record(s) from {}",
        imported.len(),
        input.display()
    );
    Ok(())
}

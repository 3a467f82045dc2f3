//! The `markbook list` command.

use std::path::Path;

use anyhow::Result;

use super::{load_roster, student_table};

pub fn execute(roster_path: &Path, format: &str) -> Result<()> {
    let roster = load_roster(roster_path)?;

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&roster.list())?);
        }
        "table" => {
            if roster.is_empty() {
                println!("(no records)");
            } else {
                println!("{}", student_table(&roster.list()));
                println!("{} record(s).", roster.len());
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }
    Ok(())
}

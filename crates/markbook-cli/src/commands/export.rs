//! The `markbook export` command.

use std::path::Path;

use anyhow::{Context, Result};

use markbook_core::codec;

use super::load_roster;

pub fn execute(roster_path: &Path, output: &Path, format: &str) -> Result<()> {
    let roster = load_roster(roster_path)?;

    match format {
        "csv" => {
            codec::save_csv(&roster, output)?;
        }
        "json" => {
            let json = serde_json::to_string_pretty(&roster.list())?;
            std::fs::write(output, json)
                .with_context(|| format!("failed to write export to {}", output.display()))?;
        }
        other => anyhow::bail!("unknown format: {other} (expected csv or json)"),
    }

    println!("Exported {} record(s) to {}", roster.len(), output.display());
    Ok(())
}

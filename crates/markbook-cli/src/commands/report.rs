//! The `markbook report` command.

use std::path::Path;

use anyhow::{Context, Result};

use markbook_core::report::{report_card, ReportStyle};

use crate::config::MarkbookConfig;

use super::load_roster;

pub fn execute(
    roster_path: &Path,
    roll: &str,
    output: Option<&Path>,
    minimal: bool,
    config: &MarkbookConfig,
) -> Result<()> {
    let roster = load_roster(roster_path)?;
    let student = roster.get(roll)?;

    let style = if minimal {
        ReportStyle::Minimal
    } else {
        config
            .report_style
            .parse()
            .map_err(|e: String| anyhow::anyhow!("{e} (in config)"))?
    };

    let text = report_card(student, style);
    match output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            println!("Report saved to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

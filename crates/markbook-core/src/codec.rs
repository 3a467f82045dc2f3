//! CSV export and import for rosters.
//!
//! The wire layout is one header line then one row per record in roster
//! order: `roll,name,marks1,marks2,marks3,total,average,grade`. Derived
//! columns are recomputed from the marks at export time and ignored on
//! import, so a file is always consistent with the marks it carries.

use std::path::Path;

use anyhow::{Context, Result};

use crate::error::RosterError;
use crate::model::Student;
use crate::roster::Roster;

/// Export column order.
pub const CSV_HEADER: [&str; 8] = [
    "roll", "name", "marks1", "marks2", "marks3", "total", "average", "grade",
];

/// Serialize a roster to CSV text.
///
/// Averages are written with exactly two decimal places. Names containing
/// commas or quotes are quoted per RFC 4180.
pub fn export_csv(roster: &Roster) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .context("failed to write CSV header")?;
    for st in roster.iter() {
        writer
            .write_record(&[
                st.roll.clone(),
                st.name.clone(),
                st.marks[0].to_string(),
                st.marks[1].to_string(),
                st.marks[2].to_string(),
                st.total().to_string(),
                format!("{:.2}", st.average()),
                st.grade().to_string(),
            ])
            .with_context(|| format!("failed to write CSV row for roll {}", st.roll))?;
    }
    let bytes = writer.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Parse CSV text into a fresh roster.
///
/// The whole import is atomic: the first bad row aborts with
/// [`RosterError::MalformedRow`] and no roster is produced, so a caller's
/// live roster is only ever replaced by a fully valid one. Rows are
/// numbered from 1 with the header as row 1.
pub fn import_csv(text: &str) -> Result<Roster, RosterError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(Ok(record)) => record,
        Some(Err(e)) => {
            return Err(RosterError::MalformedRow {
                row: 1,
                reason: e.to_string(),
            })
        }
        None => {
            return Err(RosterError::MalformedRow {
                row: 1,
                reason: "missing header".to_string(),
            })
        }
    };
    if header.len() < CSV_HEADER.len() {
        return Err(RosterError::MalformedRow {
            row: 1,
            reason: format!(
                "expected at least {} columns, got {}",
                CSV_HEADER.len(),
                header.len()
            ),
        });
    }

    let mut roster = Roster::new();
    for (idx, result) in records.enumerate() {
        let row = idx + 2;
        let record = result.map_err(|e| RosterError::MalformedRow {
            row,
            reason: e.to_string(),
        })?;
        if record.len() < CSV_HEADER.len() {
            let content = record.iter().collect::<Vec<_>>().join(",");
            return Err(RosterError::MalformedRow {
                row,
                reason: format!(
                    "expected at least {} columns, got {} in \"{content}\"",
                    CSV_HEADER.len(),
                    record.len()
                ),
            });
        }

        let mut marks = [0u8; 3];
        for (slot, field) in marks.iter_mut().zip([&record[2], &record[3], &record[4]]) {
            let n: i64 = field.trim().parse().map_err(|_| RosterError::MalformedRow {
                row,
                reason: "marks must be integers".to_string(),
            })?;
            if !(0..=100).contains(&n) {
                return Err(RosterError::MalformedRow {
                    row,
                    reason: "marks must be between 0 and 100".to_string(),
                });
            }
            *slot = n as u8;
        }

        roster.upsert(Student {
            roll: record[0].trim().to_string(),
            name: record[1].trim().to_string(),
            marks,
        });
    }

    tracing::debug!(records = roster.len(), "imported roster from CSV");
    Ok(roster)
}

/// Write a roster to a CSV file.
pub fn save_csv(roster: &Roster, path: &Path) -> Result<()> {
    let text = export_csv(roster)?;
    std::fs::write(path, text)
        .with_context(|| format!("failed to write roster to {}", path.display()))?;
    Ok(())
}

/// Load a roster from a CSV file.
///
/// Callers keep their existing roster on error; a new one is only returned
/// once the whole file has parsed.
pub fn load_csv(path: &Path) -> Result<Roster> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster from {}", path.display()))?;
    let roster = import_csv(&text)
        .with_context(|| format!("failed to parse roster from {}", path.display()))?;
    Ok(roster)
}

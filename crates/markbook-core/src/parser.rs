//! Raw-input validation.
//!
//! Turns the textual fields an adapter collects (CLI arguments, form
//! entries) into a well-formed [`Student`], or rejects them with a typed
//! error. Nothing else constructs records from user input.

use crate::error::RosterError;
use crate::model::{Student, SUBJECT_COUNT};

/// Parse three textual marks into integers, in input order.
///
/// The order is meaningful: it maps to subjects 1/2/3. Values are trimmed
/// before parsing. A non-integer fails before any range check, so "12.5"
/// reports [`RosterError::MarksNotInteger`] while "150" reports
/// [`RosterError::MarksOutOfRange`].
pub fn parse_marks(m1: &str, m2: &str, m3: &str) -> Result<[u8; SUBJECT_COUNT], RosterError> {
    let raw = [m1, m2, m3];
    let mut marks = [0u8; SUBJECT_COUNT];
    for (slot, value) in marks.iter_mut().zip(raw) {
        let n: i64 = value
            .trim()
            .parse()
            .map_err(|_| RosterError::MarksNotInteger)?;
        if !(0..=100).contains(&n) {
            return Err(RosterError::MarksOutOfRange);
        }
        *slot = n as u8;
    }
    Ok(marks)
}

/// Trim roll and name and reject empties, roll first.
///
/// Returns the trimmed values so callers store exactly what was validated.
pub fn require_non_empty(roll: &str, name: &str) -> Result<(String, String), RosterError> {
    let roll = roll.trim();
    if roll.is_empty() {
        return Err(RosterError::EmptyRoll);
    }
    let name = name.trim();
    if name.is_empty() {
        return Err(RosterError::EmptyName);
    }
    Ok((roll.to_string(), name.to_string()))
}

/// Validate a full set of raw fields into a [`Student`].
pub fn build_student(
    roll: &str,
    name: &str,
    m1: &str,
    m2: &str,
    m3: &str,
) -> Result<Student, RosterError> {
    let (roll, name) = require_non_empty(roll, name)?;
    let marks = parse_marks(m1, m2, m3)?;
    Ok(Student { roll, name, marks })
}

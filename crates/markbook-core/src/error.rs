//! Roster error types.
//!
//! One enum covers every failure the core can signal, so adapters can match
//! on kind instead of string contents when deciding how to react.

use thiserror::Error;

/// Errors signalled by roster operations, validation, and the CSV codec.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roll field was empty after trimming.
    #[error("roll number cannot be empty")]
    EmptyRoll,

    /// The name field was empty after trimming.
    #[error("name cannot be empty")]
    EmptyName,

    /// One of the marks was not an integer literal.
    #[error("marks must be integers (0-100)")]
    MarksNotInteger,

    /// One of the marks fell outside 0..=100.
    #[error("marks must be between 0 and 100")]
    MarksOutOfRange,

    /// No record with the given roll exists.
    #[error("no record with roll {0}")]
    NotFound(String),

    /// A CSV row could not be imported. Rows are numbered from 1 with the
    /// header as row 1, so data rows start at 2.
    #[error("row {row} is malformed: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// An operation that needs at least one record ran on an empty roster.
    #[error("no records available")]
    EmptyRoster,
}

impl RosterError {
    /// Returns `true` for input-validation failures, which are always
    /// recoverable and surfaced verbatim to the user.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RosterError::EmptyRoll
                | RosterError::EmptyName
                | RosterError::MarksNotInteger
                | RosterError::MarksOutOfRange
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_classification() {
        assert!(RosterError::EmptyRoll.is_validation());
        assert!(RosterError::MarksOutOfRange.is_validation());
        assert!(!RosterError::NotFound("S1".into()).is_validation());
        assert!(!RosterError::EmptyRoster.is_validation());
    }

    #[test]
    fn messages() {
        let err = RosterError::MalformedRow {
            row: 3,
            reason: "expected at least 8 columns, got 5".into(),
        };
        assert_eq!(
            err.to_string(),
            "row 3 is malformed: expected at least 8 columns, got 5"
        );
        assert_eq!(
            RosterError::NotFound("S9".into()).to_string(),
            "no record with roll S9"
        );
    }
}

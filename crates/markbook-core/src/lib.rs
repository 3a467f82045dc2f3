//! markbook-core — Roster store, grading, queries, and CSV codec.
//!
//! This crate is the record-management engine behind markbook: the student
//! model with derived metrics, validation of raw input, the
//! insertion-ordered roster store, search and topper queries, and the
//! CSV/report serialization contracts. Presentation (CLI, GUI) lives in
//! adapter crates that call in through these modules and render the
//! results; nothing here prints.

pub mod codec;
pub mod error;
pub mod model;
pub mod parser;
pub mod query;
pub mod report;
pub mod roster;

pub use error::RosterError;
pub use model::{Grade, Student, SUBJECT_COUNT};
pub use query::SearchOutcome;
pub use report::ReportStyle;
pub use roster::{Roster, UpsertOutcome};

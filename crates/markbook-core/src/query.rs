//! Read-only queries over a roster.

use crate::error::RosterError;
use crate::model::Student;
use crate::roster::Roster;

/// Result of a roster search.
///
/// A blank query is not the same as a query with no hits: the former means
/// the caller should prompt the user for input, the latter is a valid empty
/// result set.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The query was empty after trimming; nothing was searched.
    NoQuery,
    /// Records whose roll or name contains the query, in roster order.
    Matches(Vec<Student>),
}

/// Case-insensitive substring search against roll and name.
pub fn search(roster: &Roster, query: &str) -> SearchOutcome {
    let query = query.trim();
    if query.is_empty() {
        return SearchOutcome::NoQuery;
    }
    let needle = query.to_lowercase();
    let hits = roster
        .iter()
        .filter(|st| {
            st.roll.to_lowercase().contains(&needle) || st.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    SearchOutcome::Matches(hits)
}

/// The record with the highest average.
///
/// Ties break toward earliest insertion: the scan only replaces the
/// candidate on a strictly greater average, so the first record attaining
/// the maximum wins.
pub fn topper(roster: &Roster) -> Result<&Student, RosterError> {
    let mut best: Option<&Student> = None;
    for student in roster.iter() {
        let replace = match best {
            Some(current) => student.average() > current.average(),
            None => true,
        };
        if replace {
            best = Some(student);
        }
    }
    best.ok_or(RosterError::EmptyRoster)
}

//! The in-memory roster store.
//!
//! An insertion-ordered collection of [`Student`] records keyed by roll.
//! Insertion order is the canonical display and iteration order, so the
//! store is a `Vec` with linear roll lookup rather than a map; rosters are
//! small and the order invariant matters more than lookup cost.

use crate::error::RosterError;
use crate::model::Student;

/// Whether an upsert inserted a new record or replaced an existing one.
///
/// The distinction is caller-visible: adapters report "Added" vs "Updated".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Added,
    Updated,
}

/// Ordered, roll-unique collection of students.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, roll: &str) -> Option<usize> {
        self.students.iter().position(|st| st.roll == roll)
    }

    /// Insert or replace by roll.
    ///
    /// A new roll appends at the end; an existing roll has its name and
    /// marks overwritten in place, keeping its position in iteration order.
    pub fn upsert(&mut self, student: Student) -> UpsertOutcome {
        match self.position(&student.roll) {
            Some(idx) => {
                self.students[idx] = student;
                UpsertOutcome::Updated
            }
            None => {
                self.students.push(student);
                UpsertOutcome::Added
            }
        }
    }

    /// Remove the record with the given roll, returning it.
    pub fn delete(&mut self, roll: &str) -> Result<Student, RosterError> {
        match self.position(roll) {
            Some(idx) => Ok(self.students.remove(idx)),
            None => Err(RosterError::NotFound(roll.to_string())),
        }
    }

    /// Look up a record by roll.
    pub fn get(&self, roll: &str) -> Result<&Student, RosterError> {
        self.students
            .iter()
            .find(|st| st.roll == roll)
            .ok_or_else(|| RosterError::NotFound(roll.to_string()))
    }

    /// Ordered snapshot of all records. Mutations after the call do not
    /// affect the returned list.
    pub fn list(&self) -> Vec<Student> {
        self.students.clone()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Remove all records. Irreversible.
    pub fn clear(&mut self) {
        self.students.clear();
    }
}

impl FromIterator<Student> for Roster {
    /// Builds a roster through [`Roster::upsert`], so duplicate rolls fold
    /// (last one wins, first position kept) and the uniqueness invariant
    /// holds for any input.
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for student in iter {
            roster.upsert(student);
        }
        roster
    }
}

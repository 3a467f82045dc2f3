//! Core data model for markbook.
//!
//! A [`Student`] holds the stored fields of one roster record; total,
//! average, and grade are always derived from the marks at call time and
//! never cached.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of graded subjects per student.
pub const SUBJECT_COUNT: usize = 3;

/// A single roster record.
///
/// `roll` is the primary key within a [`Roster`](crate::roster::Roster);
/// the fixed-size marks array carries the exactly-three-subjects invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier within a roster.
    pub roll: String,
    /// Display name.
    pub name: String,
    /// Marks for subjects 1-3, each in 0..=100.
    pub marks: [u8; SUBJECT_COUNT],
}

impl Student {
    /// Sum of all marks.
    pub fn total(&self) -> u32 {
        self.marks.iter().map(|&m| u32::from(m)).sum()
    }

    /// Mean mark, rounded to 2 decimal places.
    ///
    /// Rounding is half-to-even on the scaled value, so a raw mean of
    /// 89.995 rounds to 90.0 and grades as A+.
    pub fn average(&self) -> f64 {
        let mean = f64::from(self.total()) / SUBJECT_COUNT as f64;
        (mean * 100.0).round_ties_even() / 100.0
    }

    /// Letter grade derived from the rounded average.
    pub fn grade(&self) -> Grade {
        Grade::from_average(self.average())
    }
}

/// Six-tier letter grade banding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Band an average into a grade. Bands are inclusive on the lower bound.
    pub fn from_average(avg: f64) -> Grade {
        if avg >= 90.0 {
            Grade::APlus
        } else if avg >= 80.0 {
            Grade::A
        } else if avg >= 70.0 {
            Grade::B
        } else if avg >= 60.0 {
            Grade::C
        } else if avg >= 50.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    /// Fixed textual judgment, one-to-one with the grade.
    pub fn remark(&self) -> &'static str {
        match self {
            Grade::APlus | Grade::A => "Excellent",
            Grade::B => "Good",
            Grade::C => "Average",
            Grade::D => "Needs Improvement",
            Grade::F => "Fail",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::APlus => write!(f, "A+"),
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

//! Report-card text rendering.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::model::Student;

/// Which report variant to render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportStyle {
    /// Full report including the remark line.
    #[default]
    Full,
    /// Omits the remark line.
    Minimal,
}

impl FromStr for ReportStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(ReportStyle::Full),
            "minimal" => Ok(ReportStyle::Minimal),
            other => Err(format!("unknown report style: {other}")),
        }
    }
}

/// Render a student's report card.
///
/// Layout is fixed: title, roll, name, marks as a literal 3-element list,
/// total, average (2 decimal places), grade, and, for [`ReportStyle::Full`],
/// a remark derived from the grade.
pub fn report_card(student: &Student, style: ReportStyle) -> String {
    let mut out = String::new();
    let grade = student.grade();

    out.push_str("=== Student Report Card ===\n");
    let _ = writeln!(out, "Roll No.: {}", student.roll);
    let _ = writeln!(out, "Name    : {}", student.name);
    let _ = writeln!(
        out,
        "Marks   : [{}, {}, {}]",
        student.marks[0], student.marks[1], student.marks[2]
    );
    let _ = writeln!(out, "Total   : {}", student.total());
    let _ = writeln!(out, "Average : {:.2}", student.average());
    let _ = writeln!(out, "Grade   : {grade}");
    if style == ReportStyle::Full {
        let _ = writeln!(out, "Remark  : {}", grade.remark());
    }
    out
}

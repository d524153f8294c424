//! Value types passed into and out of the grading engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::grading::classify::{LetterGrade, Remark};

/// One graded course in a single term, read from a subjects sheet.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubjectRecord {
    pub name: String,
    pub marks: f64,
    pub credit_hours: u32,
}

impl SubjectRecord {
    pub fn new(name: &str, marks: f64, credit_hours: u32) -> Self {
        Self {
            name: name.to_string(),
            marks,
            credit_hours,
        }
    }

    /// A named subject with marks between 0 and 100.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && (0.0..=100.0).contains(&self.marks)
    }
}

/// Most credit hours a single semester may carry.
pub const MAX_SEMESTER_CREDIT_HOURS: f64 = 1_000.0;

/// One completed term's GPA, read from a semesters sheet.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SemesterRecord {
    pub name: String,
    pub gpa: f64,
    pub total_credit_hours: f64,
}

impl SemesterRecord {
    pub fn new(name: &str, gpa: f64, total_credit_hours: f64) -> Self {
        Self {
            name: name.to_string(),
            gpa,
            total_credit_hours,
        }
    }

    /// A GPA between 0 and 4 carrying a positive number of credit hours, at
    /// most [`MAX_SEMESTER_CREDIT_HOURS`]. The bound keeps `gpa * hours` finite.
    pub fn is_valid(&self) -> bool {
        (0.0..=4.0).contains(&self.gpa)
            && self.total_credit_hours > 0.0
            && self.total_credit_hours <= MAX_SEMESTER_CREDIT_HOURS
    }
}

/// Which aggregate a score was computed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoreKind {
    Gpa,
    Cgpa,
}

impl ScoreKind {
    pub fn label(self) -> &'static str {
        match self {
            ScoreKind::Gpa => "GPA",
            ScoreKind::Cgpa => "CGPA",
        }
    }
}

/// An aggregate score together with its letter grade and remark.
///
/// `score` is never rounded; use [`GradeResult::display_score`] for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeResult {
    pub kind: ScoreKind,
    pub score: f64,
    pub letter_grade: LetterGrade,
    pub remarks: Remark,
}

impl GradeResult {
    pub fn display_score(&self, precision: usize) -> String {
        format!("{:.*}", precision, self.score)
    }
}

/// A calculation as written to the results history CSV.
#[derive(Debug, Serialize)]
pub struct ResultRecord {
    pub timestamp: DateTime<Utc>,
    pub kind: ScoreKind,
    pub score: f64,
    pub letter_grade: LetterGrade,
    pub remarks: Remark,
    pub record_count: usize,
    pub total_credit_hours: f64,
}

impl ResultRecord {
    pub fn from_result(result: &GradeResult, record_count: usize, total_credit_hours: f64) -> Self {
        ResultRecord {
            timestamp: Utc::now(),
            kind: result.kind,
            score: result.score,
            letter_grade: result.letter_grade,
            remarks: result.remarks,
            record_count,
            total_credit_hours,
        }
    }
}

//! Grade conversion and aggregation.
//!
//! Maps percentages to numerical grade points through a fixed institutional
//! step table, classifies percentages into letter grades and remarks, and
//! reduces subjects and semesters into credit-hour-weighted GPA and CGPA.
//!
//! Everything in here is pure: no I/O, no logging, no shared state.

pub mod aggregate;
pub mod classify;
pub mod inverse;
pub mod table;
pub mod types;
pub mod utility;

pub use aggregate::{compute_cgpa, compute_gpa, grade_result};
pub use classify::{LetterGrade, Remark, letter_grade, remarks};
pub use inverse::percentage_from_grade_point;
pub use table::{grade_point_from_percentage, percentage_of_marks};
pub use types::{GradeResult, ScoreKind, SemesterRecord, SubjectRecord};

use crate::grading::classify::{letter_grade, remarks};
use crate::grading::inverse::percentage_from_grade_point;
use crate::grading::table::{grade_point_from_percentage, percentage_of_marks};
use crate::grading::types::{GradeResult, ScoreKind, SemesterRecord, SubjectRecord};
use crate::grading::utility::weighted_mean;

/// Credit-hour-weighted mean of each subject's grade point.
///
/// Expects subjects that already passed [`SubjectRecord::is_valid`]; nothing
/// is re-checked here. Returns 0.0 when total credit hours is zero.
pub fn compute_gpa(subjects: &[SubjectRecord]) -> f64 {
    weighted_mean(subjects.iter().map(|subject| {
        let grade_point = grade_point_from_percentage(percentage_of_marks(subject.marks));
        (grade_point, subject.credit_hours as f64)
    }))
}

/// Credit-hour-weighted mean of semester GPAs.
///
/// Expects semesters that already passed [`SemesterRecord::is_valid`].
/// Returns 0.0 when total credit hours is zero.
pub fn compute_cgpa(semesters: &[SemesterRecord]) -> f64 {
    weighted_mean(
        semesters
            .iter()
            .map(|semester| (semester.gpa, semester.total_credit_hours)),
    )
}

/// Grades an aggregate score by approximating its percentage and classifying that.
pub fn grade_result(kind: ScoreKind, score: f64) -> GradeResult {
    let percentage = percentage_from_grade_point(score) as f64;

    GradeResult {
        kind,
        score,
        letter_grade: letter_grade(percentage),
        remarks: remarks(percentage),
    }
}

/// Sum of subject credit hours.
pub fn subject_credit_hours(subjects: &[SubjectRecord]) -> f64 {
    subjects.iter().map(|s| s.credit_hours as f64).sum()
}

/// Sum of semester credit hours.
pub fn semester_credit_hours(semesters: &[SemesterRecord]) -> f64 {
    semesters.iter().map(|s| s.total_credit_hours).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::classify::{LetterGrade, Remark};

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_empty_inputs_return_zero() {
        assert_eq!(compute_gpa(&[]), 0.0);
        assert_eq!(compute_cgpa(&[]), 0.0);
    }

    #[test]
    fn test_zero_credit_subjects_return_zero() {
        let subjects = vec![SubjectRecord::new("Seminar", 90.0, 0)];
        assert_eq!(compute_gpa(&subjects), 0.0);
    }

    #[test]
    fn test_gpa_weighted_mean() {
        let subjects = vec![
            SubjectRecord::new("Calculus", 90.0, 3),
            SubjectRecord::new("Ethics", 60.0, 1),
        ];
        let gpa = compute_gpa(&subjects);
        assert!((gpa - (4.00 * 3.0 + 1.83 * 1.0) / 4.0).abs() < EPSILON);
        assert!((gpa - 3.4575).abs() < EPSILON);
    }

    #[test]
    fn test_gpa_single_subject_is_its_grade_point() {
        let subjects = vec![SubjectRecord::new("Physics", 74.0, 4)];
        assert_eq!(compute_gpa(&subjects), 3.00);
    }

    #[test]
    fn test_gpa_rounds_fractional_marks() {
        let subjects = vec![SubjectRecord::new("Physics", 73.6, 2)];
        assert_eq!(compute_gpa(&subjects), 3.00);
    }

    #[test]
    fn test_cgpa_weighted_mean() {
        let semesters = vec![
            SemesterRecord::new("Fall", 3.5, 18.0),
            SemesterRecord::new("Spring", 3.0, 15.0),
        ];
        let cgpa = compute_cgpa(&semesters);
        assert!((cgpa - (3.5 * 18.0 + 3.0 * 15.0) / 33.0).abs() < EPSILON);
        assert!((cgpa - 3.2727).abs() < 1e-4);
    }

    #[test]
    fn test_grade_result_for_exact_table_value() {
        let result = grade_result(ScoreKind::Gpa, 3.00);
        assert_eq!(result.letter_grade, LetterGrade::B);
        assert_eq!(result.remarks, Remark::Good);
    }

    #[test]
    fn test_grade_result_for_averaged_gpa() {
        let result = grade_result(ScoreKind::Gpa, 3.4575);
        assert_eq!(result.score, 3.4575);
        assert_eq!(result.letter_grade, LetterGrade::A);
        assert_eq!(result.remarks, Remark::Excellent);
    }

    #[test]
    fn test_grade_result_for_cgpa() {
        // 3.2727... approximates to 82
        let result = grade_result(ScoreKind::Cgpa, (3.5 * 18.0 + 3.0 * 15.0) / 33.0);
        assert_eq!(result.kind, ScoreKind::Cgpa);
        assert_eq!(result.letter_grade, LetterGrade::AMinus);
        assert_eq!(result.remarks, Remark::Excellent);
    }

    #[test]
    fn test_grade_result_for_zero() {
        let result = grade_result(ScoreKind::Gpa, 0.0);
        assert_eq!(result.letter_grade, LetterGrade::F);
        assert_eq!(result.remarks, Remark::Fail);
    }

    #[test]
    fn test_credit_hour_totals() {
        let subjects = vec![
            SubjectRecord::new("Calculus", 90.0, 3),
            SubjectRecord::new("Ethics", 60.0, 1),
        ];
        let semesters = vec![
            SemesterRecord::new("Fall", 3.5, 18.0),
            SemesterRecord::new("Spring", 3.0, 15.5),
        ];
        assert_eq!(subject_credit_hours(&subjects), 4.0);
        assert_eq!(semester_credit_hours(&semesters), 33.5);
    }
}

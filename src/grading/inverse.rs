use crate::grading::table::{GRADE_POINTS, MAX_PERCENTAGE};

/// Recovers a percentage from a grade point so an aggregate GPA or CGPA can be
/// given a letter grade and remarks.
///
/// A grade point that is exactly one of the table's values maps back to the
/// lowest percentage awarding it (so 4.00 gives 85). Anything else, which is
/// the usual case after averaging, falls back to `round(gp / 4 * 100)`.
///
/// The fallback is a linear approximation and not an inverse of the table:
/// the table climbs in irregular steps and reaches 4.00 at 85, so for example
/// 3.41 maps to 85 even though no subject scoring 85 earns less than 4.00.
/// It must not be used for per-subject computation.
///
/// 0.0 maps to 0. Negative or non-finite input maps to 0; results are clamped
/// to 100.
pub fn percentage_from_grade_point(grade_point: f64) -> u8 {
    if !grade_point.is_finite() || grade_point <= 0.0 {
        return 0;
    }

    if let Some(&(percentage, _)) = GRADE_POINTS
        .iter()
        .skip(1)
        .find(|&&(_, gp)| gp == grade_point)
    {
        return percentage;
    }

    let approx = (grade_point / 4.0 * 100.0).round();
    approx.clamp(0.0, MAX_PERCENTAGE as f64) as u8
}

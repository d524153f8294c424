/// Percentage thresholds and the grade point awarded from each one upward.
///
/// Sorted by percentage. A percentage earns the grade point of the last
/// threshold it reaches, so everything below 50 is 0.00 and everything from
/// 85 up is 4.00. The steps between 50 and 80 are deliberately irregular and
/// must be kept verbatim.
pub static GRADE_POINTS: &[(u8, f64)] = &[
    (0, 0.00),
    (50, 1.00),
    (51, 1.08),
    (52, 1.17),
    (53, 1.25),
    (54, 1.33),
    (55, 1.42),
    (56, 1.50),
    (57, 1.58),
    (58, 1.67),
    (59, 1.75),
    (60, 1.83),
    (61, 1.92),
    (62, 2.00),
    (63, 2.08),
    (64, 2.17),
    (65, 2.25),
    (66, 2.33),
    (67, 2.42),
    (68, 2.50),
    (69, 2.58),
    (70, 2.67),
    (71, 2.75),
    (72, 2.83),
    (73, 2.92),
    (74, 3.00),
    (75, 3.08),
    (76, 3.17),
    (77, 3.25),
    (78, 3.33),
    (79, 3.42),
    (80, 3.50),
    (81, 3.60),
    (82, 3.70),
    (83, 3.80),
    (84, 3.90),
    (85, 4.00),
];

/// Highest percentage a mark can convert to.
pub const MAX_PERCENTAGE: u8 = 100;

/// Looks up the grade point (0.00–4.00) for an integer percentage.
///
/// Percentages above 100 saturate like every value from 85 up.
pub fn grade_point_from_percentage(percentage: u8) -> f64 {
    let idx = GRADE_POINTS.partition_point(|&(threshold, _)| threshold <= percentage);
    // The first threshold is 0, so idx is never 0.
    GRADE_POINTS[idx - 1].1
}

/// Converts raw marks into the integer percentage the table is keyed on.
///
/// Marks are already out of 100, so this only rounds (half away from zero)
/// and clamps into `[0, 100]`. `NaN` becomes 0.
pub fn percentage_of_marks(marks: f64) -> u8 {
    if marks.is_nan() {
        return 0;
    }
    marks.round().clamp(0.0, MAX_PERCENTAGE as f64) as u8
}

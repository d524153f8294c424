//! Letter grades and remarks for a percentage.
//!
//! Both classifiers read the same band table so their boundaries can never
//! drift apart.

use serde::Serialize;
use std::fmt;

/// Letter grades from highest to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LetterGrade {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A−")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B−")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C−")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl LetterGrade {
    /// The printed form. Minus grades use U+2212, not a hyphen.
    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::AMinus => "A−",
            LetterGrade::BPlus => "B+",
            LetterGrade::B => "B",
            LetterGrade::BMinus => "B−",
            LetterGrade::CPlus => "C+",
            LetterGrade::C => "C",
            LetterGrade::CMinus => "C−",
            LetterGrade::DPlus => "D+",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative remark, coarser than the letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Remark {
    Excellent,
    Good,
    Adequate,
    #[serde(rename = "Minimum acceptable")]
    MinimumAcceptable,
    Fail,
}

impl Remark {
    pub fn as_str(self) -> &'static str {
        match self {
            Remark::Excellent => "Excellent",
            Remark::Good => "Good",
            Remark::Adequate => "Adequate",
            Remark::MinimumAcceptable => "Minimum acceptable",
            Remark::Fail => "Fail",
        }
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower bound (inclusive) of each band, highest first.
///
/// | Range  | Grade | Remark             |
/// |--------|-------|--------------------|
/// | >= 85  | A     | Excellent          |
/// | >= 80  | A−    | Excellent          |
/// | >= 75  | B+    | Good               |
/// | >= 71  | B     | Good               |
/// | >= 68  | B−    | Good               |
/// | >= 64  | C+    | Adequate           |
/// | >= 61  | C     | Adequate           |
/// | >= 58  | C−    | Adequate           |
/// | >= 54  | D+    | Minimum acceptable |
/// | >= 50  | D     | Minimum acceptable |
/// | < 50   | F     | Fail               |
static BANDS: &[(f64, LetterGrade, Remark)] = &[
    (85.0, LetterGrade::A, Remark::Excellent),
    (80.0, LetterGrade::AMinus, Remark::Excellent),
    (75.0, LetterGrade::BPlus, Remark::Good),
    (71.0, LetterGrade::B, Remark::Good),
    (68.0, LetterGrade::BMinus, Remark::Good),
    (64.0, LetterGrade::CPlus, Remark::Adequate),
    (61.0, LetterGrade::C, Remark::Adequate),
    (58.0, LetterGrade::CMinus, Remark::Adequate),
    (54.0, LetterGrade::DPlus, Remark::MinimumAcceptable),
    (50.0, LetterGrade::D, Remark::MinimumAcceptable),
];

fn band(percentage: f64) -> (LetterGrade, Remark) {
    BANDS
        .iter()
        .find(|&&(floor, _, _)| percentage >= floor)
        .map(|&(_, grade, remark)| (grade, remark))
        .unwrap_or((LetterGrade::F, Remark::Fail))
}

/// Letter grade for a percentage. Anything under 50, including `NaN`, is F.
pub fn letter_grade(percentage: f64) -> LetterGrade {
    band(percentage).0
}

/// Remark for a percentage, banded on the same thresholds as [`letter_grade`].
pub fn remarks(percentage: f64) -> Remark {
    band(percentage).1
}

//! CSV parser for subject and semester sheets.
//!
//! Subjects are read from `name,marks,credit_hours` and semesters from
//! `name,gpa,total_credit_hours`. Rows that parse but fail the validity
//! rules are dropped here, before anything reaches the grading engine.

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::grading::{SemesterRecord, SubjectRecord};

fn parse_rows<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for (line, result) in rdr.deserialize().enumerate() {
        let record: T = result.with_context(|| format!("malformed row {}", line + 1))?;
        rows.push(record);
    }

    Ok(rows)
}

/// Decodes subject rows from any CSV reader.
pub fn parse_subjects<R: Read>(reader: R) -> Result<Vec<SubjectRecord>> {
    parse_rows(reader)
}

/// Decodes semester rows from any CSV reader.
pub fn parse_semesters<R: Read>(reader: R) -> Result<Vec<SemesterRecord>> {
    parse_rows(reader)
}

/// Reads a subjects sheet from disk.
pub fn load_subjects(path: &Path) -> Result<Vec<SubjectRecord>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let subjects =
        parse_subjects(file).with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(path = %path.display(), rows = subjects.len(), "Subjects loaded");
    Ok(subjects)
}

/// Reads a semesters sheet from disk.
pub fn load_semesters(path: &Path) -> Result<Vec<SemesterRecord>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let semesters =
        parse_semesters(file).with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(path = %path.display(), rows = semesters.len(), "Semesters loaded");
    Ok(semesters)
}

/// Keeps only valid subjects.
///
/// # Errors
///
/// Fails when no subject survives, since there is nothing to grade.
pub fn valid_subjects(subjects: Vec<SubjectRecord>) -> Result<Vec<SubjectRecord>> {
    let valid: Vec<_> = subjects
        .into_iter()
        .filter(|subject| {
            let ok = subject.is_valid();
            if !ok {
                warn!(name = %subject.name, marks = subject.marks, "Skipping invalid subject");
            }
            ok
        })
        .collect();

    if valid.is_empty() {
        bail!("invalid input: add at least one valid subject with marks between 0-100");
    }
    Ok(valid)
}

/// Keeps only valid semesters.
///
/// # Errors
///
/// Fails when no semester survives.
pub fn valid_semesters(semesters: Vec<SemesterRecord>) -> Result<Vec<SemesterRecord>> {
    let valid: Vec<_> = semesters
        .into_iter()
        .filter(|semester| {
            let ok = semester.is_valid();
            if !ok {
                warn!(
                    name = %semester.name,
                    gpa = semester.gpa,
                    total_credit_hours = semester.total_credit_hours,
                    "Skipping invalid semester"
                );
            }
            ok
        })
        .collect();

    if valid.is_empty() {
        bail!("invalid input: add at least one valid semester with GPA (0-4) and credit hours");
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::compute_cgpa;

    #[test]
    fn test_parse_subjects() {
        let data = "name,marks,credit_hours\nCalculus,90,3\n Ethics , 60.5 ,1\n";
        let subjects = parse_subjects(data.as_bytes()).unwrap();

        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0], SubjectRecord::new("Calculus", 90.0, 3));
        assert_eq!(subjects[1], SubjectRecord::new("Ethics", 60.5, 1));
    }

    #[test]
    fn test_parse_semesters() {
        let data = "name,gpa,total_credit_hours\nFall,3.5,18\nSpring,3.0,15\n";
        let semesters = parse_semesters(data.as_bytes()).unwrap();

        assert_eq!(semesters.len(), 2);
        assert_eq!(semesters[1], SemesterRecord::new("Spring", 3.0, 15.0));
    }

    #[test]
    fn test_parse_header_only() {
        let subjects = parse_subjects("name,marks,credit_hours\n".as_bytes()).unwrap();
        assert!(subjects.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_rows() {
        let data = "name,marks,credit_hours\nCalculus,ninety,3\n";
        assert!(parse_subjects(data.as_bytes()).is_err());

        let data = "name,marks,credit_hours\nCalculus,90,-1\n";
        assert!(parse_subjects(data.as_bytes()).is_err());
    }

    #[test]
    fn test_valid_subjects_drops_invalid_rows() {
        let subjects = vec![
            SubjectRecord::new("Calculus", 90.0, 3),
            SubjectRecord::new("", 80.0, 3),
            SubjectRecord::new("Physics", 140.0, 3),
        ];
        let valid = valid_subjects(subjects).unwrap();
        assert_eq!(valid, vec![SubjectRecord::new("Calculus", 90.0, 3)]);
    }

    #[test]
    fn test_valid_subjects_requires_one_survivor() {
        let err = valid_subjects(vec![SubjectRecord::new(" ", 80.0, 3)]).unwrap_err();
        assert!(err.to_string().contains("at least one valid subject"));
        assert!(valid_subjects(Vec::new()).is_err());
    }

    #[test]
    fn test_valid_semesters() {
        let semesters = vec![
            SemesterRecord::new("Fall", 3.5, 18.0),
            SemesterRecord::new("Spring", 4.5, 15.0),
            SemesterRecord::new("Summer", 3.0, 0.0),
        ];
        let valid = valid_semesters(semesters).unwrap();
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].name, "Fall");

        assert!(valid_semesters(vec![SemesterRecord::new("Summer", 3.0, 0.0)]).is_err());
    }

    #[test]
    fn test_valid_semesters_drops_unbounded_credit_hours() {
        let data = "name,gpa,total_credit_hours\nFall,3.5,inf\nSpring,3.0,15\nSummer,3.0,1e308\n";
        let semesters = parse_semesters(data.as_bytes()).unwrap();
        assert_eq!(semesters.len(), 3);

        let valid = valid_semesters(semesters).unwrap();
        assert_eq!(valid, vec![SemesterRecord::new("Spring", 3.0, 15.0)]);

        let cgpa = compute_cgpa(&valid);
        assert!(cgpa.is_finite() && (0.0..=4.0).contains(&cgpa));
        assert_eq!(cgpa, 3.0);

        let data = "name,gpa,total_credit_hours\nFall,3.5,1e308\nSpring,3.0,1e308\n";
        assert!(valid_semesters(parse_semesters(data.as_bytes()).unwrap()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_subjects(Path::new("/nonexistent/subjects.csv")).unwrap_err();
        assert!(err.to_string().contains("cannot open"));
    }
}

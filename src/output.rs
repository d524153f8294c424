//! Output formatting and persistence for grade results.
//!
//! Supports a one-line summary, JSON logging, and CSV history append.

use anyhow::Result;
use tracing::{debug, info};

use crate::grading::GradeResult;
use crate::grading::types::ResultRecord;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Renders a result as `GPA 3.46 (A, Excellent)`.
pub fn summary_line(result: &GradeResult, precision: usize) -> String {
    format!(
        "{} {} ({}, {})",
        result.kind.label(),
        result.display_score(precision),
        result.letter_grade,
        result.remarks
    )
}

/// Logs a grade result as pretty-printed JSON.
pub fn print_json(result: &GradeResult) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Appends a [`ResultRecord`] as a row to a CSV file.
///
/// Writes headers first when the file is missing or empty.
pub fn append_record(path: &str, record: &ResultRecord) -> Result<()> {
    let needs_header = std::fs::metadata(Path::new(path))
        .map(|meta| meta.len() == 0)
        .unwrap_or(true);
    debug!(path, needs_header, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}

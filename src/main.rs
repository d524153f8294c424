//! CLI entry point for the GPA calculator.
//!
//! Provides subcommands for computing a semester GPA from a subjects sheet,
//! a cumulative CGPA from a semesters sheet, and inspecting the grading table.

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use gpa_calculator::{
    config::CalculatorConfig,
    grading::{
        GradeResult, ScoreKind,
        aggregate::{semester_credit_hours, subject_credit_hours},
        compute_cgpa, compute_gpa, grade_point_from_percentage, grade_result, letter_grade,
        percentage_from_grade_point, percentage_of_marks, remarks,
        types::ResultRecord,
    },
    output::{append_record, print_json, summary_line},
    parser::{load_semesters, load_subjects, valid_semesters, valid_subjects},
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gpa_calculator")]
#[command(about = "Compute semester GPA and cumulative CGPA", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a GPA from a CSV of subjects (name,marks,credit_hours)
    Gpa {
        /// Path to the subjects CSV
        #[arg(value_name = "SUBJECTS_CSV")]
        subjects: PathBuf,

        /// CSV file to append the result to (defaults to GPA_HISTORY_PATH)
        #[arg(short, long)]
        output: Option<String>,

        /// Also log the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Compute a CGPA from a CSV of semesters (name,gpa,total_credit_hours)
    Cgpa {
        /// Path to the semesters CSV
        #[arg(value_name = "SEMESTERS_CSV")]
        semesters: PathBuf,

        /// CSV file to append the result to (defaults to GPA_HISTORY_PATH)
        #[arg(short, long)]
        output: Option<String>,

        /// Also log the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Look up a single mark or grade point
    #[command(group(
        ArgGroup::new("value")
            .args(["marks", "grade_point"])
            .required(true)
            .multiple(false)
    ))]
    Lookup {
        /// Marks out of 100
        #[arg(long, allow_negative_numbers = true)]
        marks: Option<f64>,

        /// Grade point between 0 and 4
        #[arg(long, allow_negative_numbers = true)]
        grade_point: Option<f64>,
    },
    /// Print the full percentage to grade point table
    Table,
}

fn main() -> Result<()> {
    let config = CalculatorConfig::load()?;

    // Logging setup: colored stderr + JSON rolling log file
    let log_dir = Path::new(&config.log_file_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&config.log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("gpa_calculator.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Gpa {
            subjects,
            output,
            json,
        } => run_gpa(&config, &subjects, output, json)?,
        Commands::Cgpa {
            semesters,
            output,
            json,
        } => run_cgpa(&config, &semesters, output, json)?,
        Commands::Lookup { marks, grade_point } => {
            if let Some(marks) = marks {
                let percentage = percentage_of_marks(marks);
                let gp = grade_point_from_percentage(percentage);
                let pct = percentage as f64;
                println!(
                    "{percentage}% -> {gp:.2} ({}, {})",
                    letter_grade(pct),
                    remarks(pct)
                );
            } else if let Some(gp) = grade_point {
                let percentage = percentage_from_grade_point(gp);
                let pct = percentage as f64;
                println!(
                    "{gp:.2} -> ~{percentage}% ({}, {})",
                    letter_grade(pct),
                    remarks(pct)
                );
            }
        }
        Commands::Table => {
            println!("percentage,grade_point,letter_grade,remarks");
            for percentage in 0..=100u8 {
                let pct = percentage as f64;
                println!(
                    "{percentage},{:.2},{},{}",
                    grade_point_from_percentage(percentage),
                    letter_grade(pct),
                    remarks(pct)
                );
            }
        }
    }

    Ok(())
}

/// Grades a subjects sheet and reports the semester GPA.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
fn run_gpa(
    config: &CalculatorConfig,
    path: &Path,
    output: Option<String>,
    json: bool,
) -> Result<()> {
    let subjects = valid_subjects(load_subjects(path)?)?;
    let result = grade_result(ScoreKind::Gpa, compute_gpa(&subjects));
    let credit_hours = subject_credit_hours(&subjects);

    info!(
        subjects = subjects.len(),
        credit_hours,
        gpa = result.score,
        grade = %result.letter_grade,
        "GPA computed"
    );

    let record = ResultRecord::from_result(&result, subjects.len(), credit_hours);
    report(config, &result, &record, output, json)
}

/// Aggregates a semesters sheet and reports the CGPA.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
fn run_cgpa(
    config: &CalculatorConfig,
    path: &Path,
    output: Option<String>,
    json: bool,
) -> Result<()> {
    let semesters = valid_semesters(load_semesters(path)?)?;
    let result = grade_result(ScoreKind::Cgpa, compute_cgpa(&semesters));
    let credit_hours = semester_credit_hours(&semesters);

    info!(
        semesters = semesters.len(),
        credit_hours,
        cgpa = result.score,
        grade = %result.letter_grade,
        "CGPA computed"
    );

    let record = ResultRecord::from_result(&result, semesters.len(), credit_hours);
    report(config, &result, &record, output, json)
}

/// Prints the summary line, then optionally logs JSON and appends to history.
fn report(
    config: &CalculatorConfig,
    result: &GradeResult,
    record: &ResultRecord,
    output: Option<String>,
    json: bool,
) -> Result<()> {
    println!("{}", summary_line(result, config.display_precision));

    if json {
        print_json(result)?;
    }

    if let Some(path) = output.or_else(|| config.history_path.clone()) {
        append_record(&path, record)?;
        info!(path = %path, "Result appended to history");
    }

    Ok(())
}

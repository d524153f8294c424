use anyhow::{Context, Result, bail};

const DEFAULT_LOG_FILE_PATH: &str = "logs/gpa_calculator.log";
const DEFAULT_PRECISION: usize = 2;
const MAX_PRECISION: usize = 6;

/// Runtime settings for the CLI, read once at startup and passed down.
///
/// | Variable                | Default                    |
/// |-------------------------|----------------------------|
/// | `LOG_FILE_PATH`         | `logs/gpa_calculator.log`  |
/// | `GPA_HISTORY_PATH`      | unset (no history written) |
/// | `GPA_DISPLAY_PRECISION` | `2`                        |
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    pub log_file_path: String,
    pub history_path: Option<String>,
    pub display_precision: usize,
}

impl CalculatorConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_file_path =
            lookup("LOG_FILE_PATH").unwrap_or_else(|| DEFAULT_LOG_FILE_PATH.to_string());
        let history_path = lookup("GPA_HISTORY_PATH").filter(|p| !p.trim().is_empty());

        let display_precision = match lookup("GPA_DISPLAY_PRECISION") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("GPA_DISPLAY_PRECISION must be a number, got '{raw}'"))?,
            None => DEFAULT_PRECISION,
        };
        if display_precision > MAX_PRECISION {
            bail!("GPA_DISPLAY_PRECISION must be at most {MAX_PRECISION}, got {display_precision}");
        }

        Ok(Self {
            log_file_path,
            history_path,
            display_precision,
        })
    }
}

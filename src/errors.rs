use chrono::NaiveDate;
use thiserror::Error;

/// Error type shared by the dataset loader, exporter, and reporting helpers.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Validation error: missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("No date column found: no column could be parsed as dates")]
    NoDateColumn,
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ReportError {
    /// True for errors caused by the contents of an uploaded file.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ReportError::Validation(_)
                | ReportError::MissingColumns(_)
                | ReportError::NoDateColumn
                | ReportError::Csv(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

//! Error types for rvvi-import

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Failures surfaced by the ingestion pipeline.
///
/// Per-file and per-row variants are caught by the orchestrator and
/// reduced to a log line plus a counter; only `Database` and `Io`
/// escalate to the caller and end the run.
#[derive(Debug, Error)]
pub enum IngestError {
    /// FORD sub-field directory name does not carry a `major.minor` prefix
    #[error("Cannot derive FORD classification for {0}")]
    Unclassifiable(PathBuf),

    /// Field-of-study directory name is absent from the reference table
    #[error("Field of study '{0}' not found in reference data")]
    UnknownFieldOfStudy(String),

    /// Workbook open or sheet read failure
    #[error(transparent)]
    Sheet(#[from] SheetError),

    /// Row failed normalization
    #[error(transparent)]
    Row(#[from] RowError),

    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Spreadsheet access errors
#[derive(Debug, Error)]
pub enum SheetError {
    /// Cannot open a workbook file
    #[error("Cannot open workbook {0}: {1}")]
    Open(PathBuf, String),

    /// Cannot read a sheet within an open workbook
    #[error("Cannot read sheet '{0}': {1}")]
    Read(String, String),
}

/// Per-row normalization failures
///
/// A rejected row is skipped in isolation; the rest of the sheet still
/// proceeds.
#[derive(Debug, Error)]
pub enum RowError {
    /// Required column header absent, or required cell empty
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// Cell present but not coercible to the target type
    #[error("Invalid value in column '{column}': {reason}")]
    InvalidValue { column: String, reason: String },
}

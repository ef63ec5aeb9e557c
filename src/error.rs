//! Error types for the benchmark runner and the report generator.

use std::io;
use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use crate::Scheme;

/// Failures raised while benchmarking. The runner does not recover from any
/// of them.
#[derive(Error, Debug)]
pub enum BenchError {
    /// A signature produced inside the run did not verify.
    #[error("{scheme} signature verification failed: {reason}")]
    Verification { scheme: Scheme, reason: String },

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON report failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type BenchResult<T> = std::result::Result<T, BenchError>;

/// Coarse classification used by the report binary to pick its log wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    MissingFile,
    MalformedInput,
    Unexpected,
}

/// Failures raised while loading tables or rendering the chart.
#[derive(Error, Debug)]
pub enum ReportError {
    /// `table` names the file's role, e.g. "Benchmark results".
    #[error("{table} file not found: {}", path.display())]
    NotFound { table: &'static str, path: PathBuf },

    #[error("File is not valid UTF-8: {}", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("CSV file is empty: {}", path.display())]
    Empty { path: PathBuf },

    #[error("Missing required columns: {0:?}")]
    MissingColumns(Vec<String>),

    #[error("Missing required operations: {0:?}")]
    MissingOperations(Vec<String>),

    #[error("No data found for operation: {0}")]
    NoData(String),

    #[error("Invalid time for operation {operation}: {value:?}")]
    InvalidValue { operation: String, value: String },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl ReportError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReportError::NotFound { .. } => ErrorKind::MissingFile,
            ReportError::Empty { .. }
            | ReportError::NotUtf8 { .. }
            | ReportError::MissingColumns(_)
            | ReportError::MissingOperations(_)
            | ReportError::NoData(_)
            | ReportError::InvalidValue { .. } => ErrorKind::MalformedInput,
            ReportError::Csv(e) if !e.is_io_error() => ErrorKind::MalformedInput,
            ReportError::Csv(_) | ReportError::Chart(_) | ReportError::Io(_) => {
                ErrorKind::Unexpected
            }
        }
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for ReportError
where
    E: std::error::Error + Send + Sync,
{
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        ReportError::Chart(e.to_string())
    }
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;

//! Report sink port
//!
//! Defines where a finished report is persisted.

use rent_quorum_domain::AnalysisReport;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting a report
#[derive(Error, Debug)]
pub enum ReportSinkError {
    #[error("Failed to serialize report: {0}")]
    Serialization(String),

    #[error("Failed to write report to {path}: {message}")]
    Io { path: PathBuf, message: String },
}

/// Destination for the finished report
pub trait ReportSink: Send + Sync {
    /// Persist `report`, returning where it was written
    fn write(&self, report: &AnalysisReport) -> Result<PathBuf, ReportSinkError>;
}

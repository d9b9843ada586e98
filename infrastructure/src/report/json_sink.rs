//! JSON file sink for analysis reports.
//!
//! Writes the whole report as one pretty-printed JSON document, replacing
//! any previous file at the same path.

use rent_quorum_application::{ReportSink, ReportSinkError};
use rent_quorum_domain::AnalysisReport;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Report sink that writes a pretty-printed JSON file
pub struct JsonFileReportSink {
    path: PathBuf,
}

impl JsonFileReportSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn io_error(&self, e: std::io::Error) -> ReportSinkError {
        ReportSinkError::Io {
            path: self.path.clone(),
            message: e.to_string(),
        }
    }
}

impl ReportSink for JsonFileReportSink {
    fn write(&self, report: &AnalysisReport) -> Result<PathBuf, ReportSinkError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut json = serde_json::to_string_pretty(report)
            .map_err(|e| ReportSinkError::Serialization(e.to_string()))?;
        json.push('\n');

        std::fs::write(&self.path, json).map_err(|e| self.io_error(e))?;
        debug!("Wrote {} responses to {}", report.answered(), self.path.display());

        Ok(self.path.clone())
    }
}

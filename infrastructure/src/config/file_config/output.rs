//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Report filename of the full pipeline
pub const DEFAULT_REPORT_PATH: &str = "llm_analysis_output.json";

/// Report filename of the compact pipeline (no narration)
pub const COMPACT_REPORT_PATH: &str = "optimized_output.json";

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Where the report is written
    pub path: PathBuf,
    /// Include per-source and consensus summaries in the report
    pub narrate: bool,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_REPORT_PATH),
            narrate: true,
            color: true,
        }
    }
}

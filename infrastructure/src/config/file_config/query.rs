//! Query configuration from TOML (`[query]` section)

use rent_quorum_domain::narration::DEFAULT_LOCALITY;
use serde::{Deserialize, Serialize};

/// Default question sent to every source
pub const DEFAULT_QUERY: &str = "rent in koramangala";

/// Raw query configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQueryConfig {
    /// Question sent to every source
    pub text: String,
    /// Locality named in the consensus summary
    pub locality: String,
}

impl Default for FileQueryConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_QUERY.to_string(),
            locality: DEFAULT_LOCALITY.to_string(),
        }
    }
}

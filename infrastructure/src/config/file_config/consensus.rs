//! Consensus configuration from TOML (`[consensus]` section)

use rent_quorum_domain::{ConsensusRule, DomainError};
use serde::{Deserialize, Serialize};

/// Raw consensus configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsensusConfig {
    /// Rule string: half, majority, unanimous, atleast:N, percentage:N or N%
    pub rule: String,
}

impl Default for FileConsensusConfig {
    fn default() -> Self {
        Self {
            rule: "half".to_string(),
        }
    }
}

impl FileConsensusConfig {
    pub fn parse_rule(&self) -> Result<ConsensusRule, DomainError> {
        self.rule.parse()
    }
}

//! Source configuration from TOML (`[sources]` section)

use rent_quorum_domain::Source;
use serde::{Deserialize, Serialize};

/// Raw source configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSourcesConfig {
    /// Source labels, queried in this order
    pub models: Vec<String>,
    /// Query sources concurrently
    pub parallel: bool,
    /// Timeout in seconds for each provider call
    pub timeout_seconds: u64,
    /// Response length bound sent to OpenAI-compatible providers
    pub max_tokens: u32,
}

impl Default for FileSourcesConfig {
    fn default() -> Self {
        Self {
            models: Source::default_sources()
                .iter()
                .map(|s| s.as_str().to_string())
                .collect(),
            parallel: false,
            timeout_seconds: 20,
            max_tokens: 500,
        }
    }
}

impl FileSourcesConfig {
    /// Parse the configured labels, keeping their order
    pub fn parse_sources(&self) -> Result<Vec<Source>, rent_quorum_domain::DomainError> {
        let sources = self
            .models
            .iter()
            .map(|label| label.parse())
            .collect::<Result<Vec<Source>, _>>()?;
        Ok(Source::unique(&sources))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sources() {
        let config = FileSourcesConfig::default();
        assert_eq!(config.parse_sources().unwrap(), Source::default_sources());
        assert_eq!(config.timeout_seconds, 20);
    }

    #[test]
    fn test_parse_keeps_order_and_drops_duplicates() {
        let config = FileSourcesConfig {
            models: vec!["llama".into(), "ChatGPT".into(), "Llama".into()],
            ..Default::default()
        };
        assert_eq!(
            config.parse_sources().unwrap(),
            vec![Source::Llama, Source::ChatGpt]
        );
    }

    #[test]
    fn test_parse_unknown_label() {
        let config = FileSourcesConfig {
            models: vec!["mistral".into()],
            ..Default::default()
        };
        assert!(config.parse_sources().is_err());
    }
}

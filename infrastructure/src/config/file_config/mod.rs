//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod consensus;
mod output;
mod providers;
mod query;
mod sources;

pub use consensus::FileConsensusConfig;
pub use output::{COMPACT_REPORT_PATH, DEFAULT_REPORT_PATH, FileOutputConfig};
pub use providers::{FileGeminiConfig, FileGroqConfig, FileOpenAiConfig, FileProvidersConfig};
pub use query::{DEFAULT_QUERY, FileQueryConfig};
pub use sources::FileSourcesConfig;

use rent_quorum_application::RunAnalysisInput;
use rent_quorum_domain::{ExtractionConfig, Narrator, Question};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("source name cannot be empty")]
    EmptySourceName,

    #[error("query text cannot be empty")]
    EmptyQuery,

    #[error("{0}")]
    Domain(#[from] rent_quorum_domain::DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question and locality
    pub query: FileQueryConfig,
    /// Which sources to ask and how
    pub sources: FileSourcesConfig,
    /// Extraction tunables (BHK range, amenities, rent band)
    pub extraction: ExtractionConfig,
    /// Consensus rule
    pub consensus: FileConsensusConfig,
    /// Report location and narration
    pub output: FileOutputConfig,
    /// Provider endpoints and credentials
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.sources.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.sources.models.iter().any(|m| m.trim().is_empty()) {
            return Err(ConfigValidationError::EmptySourceName);
        }

        if self.query.text.trim().is_empty() {
            return Err(ConfigValidationError::EmptyQuery);
        }

        self.sources.parse_sources()?;
        self.consensus.parse_rule()?;
        self.extraction.validate()?;

        Ok(())
    }

    /// Switch to the compact pipeline: 1-3 BHK, no narration, and the
    /// compact report filename
    pub fn apply_compact(&mut self) {
        self.extraction = std::mem::take(&mut self.extraction).compact();
        self.output.narrate = false;
        self.output.path = COMPACT_REPORT_PATH.into();
    }

    /// Build the use case input described by this configuration
    pub fn to_analysis_input(&self) -> Result<RunAnalysisInput, ConfigValidationError> {
        self.validate()?;

        let question = Question::new(self.query.text.clone())?;
        let input = RunAnalysisInput::new(question, self.sources.parse_sources()?)
            .with_extraction(self.extraction.clone())
            .with_rule(self.consensus.parse_rule()?)
            .with_parallel(self.sources.parallel);

        Ok(if self.output.narrate {
            input.with_narrator(Narrator::new(self.query.locality.clone()))
        } else {
            input.without_narration()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rent_quorum_domain::{ConsensusRule, Source};
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[query]
text = "rent in indiranagar"
locality = "Indiranagar"

[sources]
models = ["Gemini", "ChatGPT"]
parallel = true
timeout_seconds = 30
max_tokens = 400

[extraction]
max_bhk = 3
amenities = ["gym", "lift"]
min_rent = 12000
max_rent = 250000

[consensus]
rule = "majority"

[output]
path = "reports/out.json"
narrate = false
color = false

[providers.groq]
model = "llama-3.3-70b-versatile"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());

        assert_eq!(config.query.locality, "Indiranagar");
        assert!(config.sources.parallel);
        assert_eq!(config.sources.max_tokens, 400);
        assert_eq!(config.extraction.max_bhk, 3);
        assert_eq!(config.extraction.amenities, vec!["gym", "lift"]);
        assert_eq!(config.consensus.parse_rule().unwrap(), ConsensusRule::Majority);
        assert_eq!(config.output.path, PathBuf::from("reports/out.json"));
        assert_eq!(config.providers.groq.model, "llama-3.3-70b-versatile");
        // Unspecified provider fields keep their defaults
        assert_eq!(config.providers.groq.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.providers.openai.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[extraction]
max_bhk = 3
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.extraction.max_bhk, 3);
        assert_eq!(config.extraction.min_rent, 10_000);
        assert_eq!(config.query.text, DEFAULT_QUERY);
        assert!(config.output.narrate);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_REPORT_PATH));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = FileConfig::default();
        config.sources.timeout_seconds = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_rejects_empty_source() {
        let mut config = FileConfig::default();
        config.sources.models.push("  ".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptySourceName)
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_rule() {
        let mut config = FileConfig::default();
        config.consensus.rule = "plurality".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::Domain(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_band() {
        let mut config = FileConfig::default();
        config.extraction.min_rent = 400_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_analysis_input() {
        let mut config = FileConfig::default();
        config.sources.models = vec!["Llama".to_string(), "Gemini".to_string()];
        config.output.narrate = false;

        let input = config.to_analysis_input().unwrap();
        assert_eq!(input.sources, vec![Source::Llama, Source::Gemini]);
        assert_eq!(input.question.content(), DEFAULT_QUERY);
        assert!(input.narrator.is_none());
        assert_eq!(input.rule, ConsensusRule::HalfRoundedUp);
    }

    #[test]
    fn test_apply_compact() {
        let mut config: FileConfig = toml::from_str(
            r#"
[extraction]
min_rent = 15000
amenities = ["gym"]
"#,
        )
        .unwrap();
        config.apply_compact();

        assert_eq!(config.extraction.max_bhk, 3);
        assert_eq!(config.extraction.min_rent, 15_000);
        assert_eq!(config.extraction.amenities, vec!["gym"]);
        assert_eq!(config.output.path, PathBuf::from(COMPACT_REPORT_PATH));

        let input = config.to_analysis_input().unwrap();
        assert!(input.narrator.is_none());
        assert_eq!(input.extraction.max_bhk, 3);
    }

    #[test]
    fn test_to_analysis_input_uses_locality() {
        let mut config = FileConfig::default();
        config.query.locality = "HSR Layout".to_string();

        let input = config.to_analysis_input().unwrap();
        assert_eq!(input.narrator.unwrap().locality(), "HSR Layout");
    }
}

//! Configuration file loading for rent-quorum
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./rent-quorum.toml` or `./.rent-quorum.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/rent-quorum/config.toml`
//! 4. Fallback: `~/.config/rent-quorum/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    COMPACT_REPORT_PATH, ConfigValidationError, DEFAULT_QUERY, DEFAULT_REPORT_PATH, FileConfig,
    FileConsensusConfig, FileGeminiConfig, FileGroqConfig, FileOpenAiConfig, FileOutputConfig,
    FileProvidersConfig, FileQueryConfig, FileSourcesConfig,
};
pub use loader::ConfigLoader;

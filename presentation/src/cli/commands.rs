//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for rent-quorum
#[derive(Parser, Debug)]
#[command(name = "rent-quorum")]
#[command(
    author,
    version,
    about = "Ask several LLMs about local rents and keep what they agree on"
)]
#[command(long_about = r#"
rent-quorum asks several LLM providers the same rental question, extracts
structured facts from each answer, and writes a report of the facts that
at least half of the answering models agree on.

The run has three phases:
1. Query: ChatGPT, Gemini and Llama are asked the configured question
2. Consensus: configurations, blocks, amenities and rents are compared
3. Report: the consolidated JSON report is written to disk

API keys are read from OPENAI_API_KEY, GEMINI_API_KEY and GROQ_API_KEY
(a .env file in the working directory is loaded first).

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./rent-quorum.toml       Project-level config
3. ~/.config/rent-quorum/config.toml   Global config

Example:
  rent-quorum
  rent-quorum -v --output reports/koramangala.json
  rent-quorum --compact
"#)]
pub struct Cli {
    /// Write the report here instead of the configured path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Compact run: 1-3 BHK only, no summaries, written to optimized_output.json
    #[arg(long)]
    pub compact: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli =
            Cli::try_parse_from(["rent-quorum", "-vv", "-q", "--output", "out.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
        assert!(!cli.no_config);
        assert!(!cli.compact);
    }

    #[test]
    fn test_parse_compact() {
        let cli = Cli::try_parse_from(["rent-quorum", "--compact"]).unwrap();
        assert!(cli.compact);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["rent-quorum", "rent in hsr"]).is_err());
    }
}

//! CLI entrypoint for rent-quorum
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use rent_quorum_application::{RunAnalysisInput, RunAnalysisUseCase};
use rent_quorum_infrastructure::{
    ConfigLoader, FileConfig, JsonFileReportSink, RoutingAnswerProvider,
};
use rent_quorum_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // API keys may live in ./.env
    let dotenv = dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if cli.compact {
        config.apply_compact();
    }

    if let Some(path) = cli.output {
        config.output.path = path;
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting rent-quorum");

    let input: RunAnalysisInput = config
        .to_analysis_input()
        .context("Invalid configuration")?;

    // === Dependency Injection ===
    let provider = Arc::new(
        RoutingAnswerProvider::from_config(&config.providers, &config.sources)
            .context("Failed to set up answer providers")?,
    );
    let sink = Arc::new(JsonFileReportSink::new(&config.output.path));

    let use_case = RunAnalysisUseCase::new(provider, sink);

    let output = if cli.quiet {
        use_case.execute(input).await
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    } else {
        use_case.execute_with_progress(input, &SimpleProgress).await
    }
    .context("Analysis did not produce a report")?;

    if !cli.quiet {
        println!("{}", ConsoleFormatter::summary(&output.report));
    }
    println!("{}", ConsoleFormatter::success(&output.location));

    Ok(())
}

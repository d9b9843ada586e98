//! Run Analysis use case
//!
//! Orchestrates a single analysis run: query every source, extract facts
//! from each answer, compute the consensus, then assemble and persist the
//! report.

use crate::ports::answer_provider::AnswerProvider;
use crate::ports::progress::{NoProgress, Phase, ProgressNotifier};
use crate::ports::report_sink::{ReportSink, ReportSinkError};
use chrono::{Local, SecondsFormat};
use futures::future::join_all;
use rent_quorum_domain::{
    AnalysisReport, ConsensusAggregator, ConsensusRule, DomainError, ExtractionConfig,
    FactExtractor, Narrator, Question, Source, SourceResult,
};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during an analysis run
///
/// Source failures are not errors: they only shrink the set of answering
/// sources.
#[derive(Error, Debug)]
pub enum RunAnalysisError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] DomainError),

    #[error("Failed to persist report: {0}")]
    SinkFailed(#[from] ReportSinkError),
}

/// Input for the RunAnalysis use case
#[derive(Debug, Clone)]
pub struct RunAnalysisInput {
    /// The question sent to every source
    pub question: Question,
    /// Sources to query, in the order they are asked. Repeats are ignored.
    pub sources: Vec<Source>,
    /// Extraction tunables
    pub extraction: ExtractionConfig,
    /// Rule deciding which facts are consensus
    pub rule: ConsensusRule,
    /// Narrator for summaries, `None` to skip narration entirely
    pub narrator: Option<Narrator>,
    /// Query sources concurrently instead of one at a time
    pub parallel: bool,
}

impl RunAnalysisInput {
    pub fn new(question: Question, sources: Vec<Source>) -> Self {
        Self {
            question,
            sources,
            extraction: ExtractionConfig::default(),
            rule: ConsensusRule::default(),
            narrator: Some(Narrator::default()),
            parallel: false,
        }
    }

    pub fn with_extraction(mut self, extraction: ExtractionConfig) -> Self {
        self.extraction = extraction;
        self
    }

    pub fn with_rule(mut self, rule: ConsensusRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_narrator(mut self, narrator: Narrator) -> Self {
        self.narrator = Some(narrator);
        self
    }

    pub fn without_narration(mut self) -> Self {
        self.narrator = None;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Output of a completed run
#[derive(Debug, Clone)]
pub struct RunAnalysisOutput {
    pub report: AnalysisReport,
    /// Where the sink wrote the report
    pub location: PathBuf,
}

/// Use case for running a single analysis
pub struct RunAnalysisUseCase<P: AnswerProvider + 'static, S: ReportSink> {
    provider: Arc<P>,
    sink: Arc<S>,
}

impl<P: AnswerProvider + 'static, S: ReportSink> RunAnalysisUseCase<P, S> {
    pub fn new(provider: Arc<P>, sink: Arc<S>) -> Self {
        Self { provider, sink }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunAnalysisInput,
    ) -> Result<RunAnalysisOutput, RunAnalysisError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunAnalysisInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<RunAnalysisOutput, RunAnalysisError> {
        let extractor = FactExtractor::new(input.extraction.clone())?;

        info!(
            "Starting analysis of {:?} with {} sources",
            input.question.content(),
            input.sources.len()
        );

        // Phase 1: Query
        let answers = self.phase_query(&input, progress).await;

        let responses: Vec<SourceResult> = answers
            .into_iter()
            .map(|(source, text)| {
                SourceResult::analyze(source, text, &extractor, input.narrator.as_ref())
            })
            .collect();

        for response in &responses {
            debug!(
                "{} yielded {} facts: {:?}",
                response.model,
                response.analysis.len(),
                response.analysis
            );
        }

        // Phase 2: Consensus
        progress.on_phase_start(&Phase::Consensus, 1);
        let aggregator = ConsensusAggregator::new(input.rule);
        let tally = aggregator.tally(&responses);
        debug!("Fact support across {} sources: {:?}", tally.sources, tally);

        let common_patterns = aggregator.decide(&tally);
        let final_response = input
            .narrator
            .as_ref()
            .map(|n| n.summarize_consensus(&common_patterns));
        info!(
            "Consensus ({}) holds {} facts from {} answering sources",
            input.rule,
            common_patterns.len(),
            responses.len()
        );
        progress.on_phase_complete(&Phase::Consensus);

        // Phase 3: Report
        progress.on_phase_start(&Phase::Report, 1);
        let generated_at = Local::now().to_rfc3339_opts(SecondsFormat::Micros, false);
        let report = AnalysisReport::new(
            &input.question,
            responses,
            common_patterns,
            final_response,
            generated_at,
        );

        let location = self.sink.write(&report)?;
        info!("Report written to {}", location.display());
        progress.on_phase_complete(&Phase::Report);

        Ok(RunAnalysisOutput { report, location })
    }

    /// Phase 1: Ask every source, keeping only those that answered
    ///
    /// Results are returned in the configured source order regardless of
    /// completion order.
    async fn phase_query(
        &self,
        input: &RunAnalysisInput,
        progress: &dyn ProgressNotifier,
    ) -> Vec<(Source, String)> {
        info!("Phase 1: Query");
        let sources = Source::unique(&input.sources);
        progress.on_phase_start(&Phase::Query, sources.len());

        let answers: Vec<(Source, Option<String>)> = if input.parallel {
            join_all(sources.iter().map(|source| async move {
                let answer = self.provider.fetch(*source, &input.question).await;
                progress.on_source_complete(*source, has_text(&answer));
                (*source, answer)
            }))
            .await
        } else {
            let mut answers = Vec::with_capacity(sources.len());
            for source in &sources {
                let answer = self.provider.fetch(*source, &input.question).await;
                progress.on_source_complete(*source, has_text(&answer));
                answers.push((*source, answer));
            }
            answers
        };

        let answered: Vec<(Source, String)> = answers
            .into_iter()
            .filter_map(|(source, answer)| match answer {
                Some(text) if !text.trim().is_empty() => {
                    info!("{} answered ({} bytes)", source, text.len());
                    Some((source, text))
                }
                _ => {
                    warn!("{} returned no answer, excluding it", source);
                    None
                }
            })
            .collect();

        progress.on_phase_complete(&Phase::Query);
        answered
    }
}

fn has_text(answer: &Option<String>) -> bool {
    answer.as_deref().is_some_and(|t| !t.trim().is_empty())
}

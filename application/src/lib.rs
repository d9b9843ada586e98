//! Application layer for rent-quorum
//!
//! This crate contains the pipeline use case and the port definitions it
//! drives. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    answer_provider::AnswerProvider,
    progress::{NoProgress, Phase, ProgressNotifier},
    report_sink::{ReportSink, ReportSinkError},
};
pub use use_cases::run_analysis::{
    RunAnalysisError, RunAnalysisInput, RunAnalysisOutput, RunAnalysisUseCase,
};

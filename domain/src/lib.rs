//! Domain layer for rent-quorum
//!
//! This crate contains the extraction and consensus logic. It performs no
//! I/O and has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Fact extraction
//!
//! Each model's free-text answer is reduced to a [`FactSet`]: apartment
//! configurations, numbered blocks, amenities and plausible monthly rents.
//!
//! ## Consensus
//!
//! Fact sets from every answering model are pooled and a fact is kept when
//! enough models report it ([`ConsensusRule`], by default at least half,
//! rounded up).
//!
//! ```text
//! answer ──► FactExtractor ──► FactSet ─┐
//! answer ──► FactExtractor ──► FactSet ─┼─► ConsensusAggregator ──► FactSet
//! answer ──► FactExtractor ──► FactSet ─┘
//! ```

pub mod consensus;
pub mod core;
pub mod extraction;
pub mod narration;
pub mod report;

// Re-export commonly used types
pub use consensus::{ConsensusAggregator, ConsensusRule, FactTally};
pub use core::{error::DomainError, question::Question, source::Source};
pub use extraction::{ExtractionConfig, FactExtractor, FactSet};
pub use narration::Narrator;
pub use report::{AnalysisReport, SourceResult};

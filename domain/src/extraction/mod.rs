//! Fact extraction
//!
//! Turns a model's free-text answer into a [`FactSet`] using fixed
//! patterns: apartment configurations, numbered blocks, amenities from a
//! closed vocabulary, and monthly rents inside a plausible band.

pub mod config;
pub mod extractor;
pub mod facts;

pub use config::ExtractionConfig;
pub use extractor::FactExtractor;
pub use facts::FactSet;

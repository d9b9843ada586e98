//! Answer provider port
//!
//! Defines how the application obtains a model's answer to the query.

use async_trait::async_trait;
use rent_quorum_domain::{Question, Source};

/// Source of raw model answers
///
/// Implementations swallow every failure (network, auth, quota, malformed
/// upstream response) and return `None`. They never retry. The pipeline
/// treats `None` and an empty answer the same way: the source is excluded.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Ask `source` the question, returning its raw text answer if any
    async fn fetch(&self, source: Source, question: &Question) -> Option<String>;
}

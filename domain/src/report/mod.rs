//! Report entities
//!
//! [`SourceResult`] captures what one source said and what was extracted
//! from it. [`AnalysisReport`] is the write-once document persisted at the
//! end of a run.

use crate::core::{question::Question, source::Source};
use crate::extraction::{FactExtractor, FactSet};
use crate::narration::Narrator;
use serde::{Deserialize, Serialize};

/// One answering source's contribution to a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceResult {
    pub model: Source,
    pub raw_response: String,
    pub analysis: FactSet,
    /// Per-source summary, absent when narration is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improved_response: Option<String>,
}

impl SourceResult {
    /// Extract facts from `raw_response` and, if a narrator is given,
    /// summarize them
    pub fn analyze(
        model: Source,
        raw_response: impl Into<String>,
        extractor: &FactExtractor,
        narrator: Option<&Narrator>,
    ) -> Self {
        let raw_response = raw_response.into();
        let analysis = extractor.extract(&raw_response);
        let improved_response = narrator.map(|n| n.summarize_source(&analysis));

        Self {
            model,
            raw_response,
            analysis,
            improved_response,
        }
    }
}

/// The consolidated output of a run
///
/// Field order here is the field order of the serialized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub query: String,
    /// Sources that answered, in the order they were queried
    pub models_used: Vec<Source>,
    pub responses: Vec<SourceResult>,
    /// Consensus fact set
    pub common_patterns: FactSet,
    /// Consensus summary, absent when narration is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_response: Option<String>,
    pub generated_at: String,
}

impl AnalysisReport {
    pub fn new(
        question: &Question,
        responses: Vec<SourceResult>,
        common_patterns: FactSet,
        final_response: Option<String>,
        generated_at: impl Into<String>,
    ) -> Self {
        Self {
            query: question.content().to_string(),
            models_used: responses.iter().map(|r| r.model).collect(),
            responses,
            common_patterns,
            final_response,
            generated_at: generated_at.into(),
        }
    }

    /// Number of sources that answered
    pub fn answered(&self) -> usize {
        self.responses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::ExtractionConfig;

    fn extractor() -> FactExtractor {
        FactExtractor::new(ExtractionConfig::default()).unwrap()
    }

    #[test]
    fn test_analyze_with_narration() {
        let narrator = Narrator::default();
        let result = SourceResult::analyze(
            Source::Gemini,
            "Studio flats near 3rd block for ₹20k",
            &extractor(),
            Some(&narrator),
        );

        assert_eq!(result.model, Source::Gemini);
        assert!(result.analysis.configurations.contains("studio"));
        assert_eq!(
            result.improved_response.as_deref(),
            Some(
                "Available configurations include studio apartments. \
                 Monthly rents typically range from ₹20000 to ₹20000. \
                 Popular rental blocks include Block 3."
            )
        );
    }

    #[test]
    fn test_analyze_without_narration_omits_field() {
        let result = SourceResult::analyze(Source::Llama, "2 BHK", &extractor(), None);
        assert!(result.improved_response.is_none());

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("improved_response").is_none());
        assert_eq!(json["model"], "Llama");
    }

    #[test]
    fn test_report_field_order() {
        let question = Question::new("rent in koramangala").unwrap();
        let response = SourceResult::analyze(Source::ChatGpt, "2 BHK", &extractor(), None);
        let report = AnalysisReport::new(
            &question,
            vec![response],
            FactSet::new(),
            Some(String::new()),
            "2026-01-01T00:00:00.000000+05:30",
        );

        let json = serde_json::to_string(&report).unwrap();
        let positions: Vec<usize> = [
            "\"query\"",
            "\"models_used\"",
            "\"responses\"",
            "\"common_patterns\"",
            "\"final_response\"",
            "\"generated_at\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(report.models_used, vec![Source::ChatGpt]);
    }

    #[test]
    fn test_report_without_answers() {
        let question = Question::new("rent in koramangala").unwrap();
        let report = AnalysisReport::new(&question, vec![], FactSet::new(), None, "now");

        assert_eq!(report.answered(), 0);
        assert!(report.models_used.is_empty());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("final_response").is_none());
    }
}

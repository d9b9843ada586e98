//! Console output for analysis results

use colored::Colorize;
use rent_quorum_domain::{AnalysisReport, FactSet};
use std::path::Path;

/// Formats analysis results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The terminal success line
    pub fn success(location: &Path) -> String {
        format!(
            "{} LLM analysis completed successfully. Report written to {}",
            "v".green(),
            location.display().to_string().bold()
        )
    }

    /// Short summary of a finished run
    pub fn summary(report: &AnalysisReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), report.query));

        let models = if report.models_used.is_empty() {
            "none".dimmed().to_string()
        } else {
            report
                .models_used
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        output.push_str(&format!("{} {}\n", "Models answered:".cyan().bold(), models));

        output.push_str(&format!("{}\n", "Common patterns:".green().bold()));
        output.push_str(&Self::fact_lines(&report.common_patterns));

        if let Some(final_response) = report.final_response.as_deref()
            && !final_response.is_empty()
        {
            output.push_str(&format!("\n{}\n", final_response));
        }

        output
    }

    fn fact_lines(facts: &FactSet) -> String {
        let line = |label: &str, values: Vec<String>| {
            let values = if values.is_empty() {
                "-".dimmed().to_string()
            } else {
                values.join(", ")
            };
            format!("  {:<10} {}\n", label, values)
        };

        let mut output = String::new();
        output.push_str(&line(
            "bhk",
            facts.configurations.iter().cloned().collect(),
        ));
        output.push_str(&line(
            "blocks",
            facts.sub_blocks.iter().map(|b| b.to_string()).collect(),
        ));
        output.push_str(&line("amenities", facts.amenities.iter().cloned().collect()));
        output.push_str(&line(
            "prices",
            facts.prices.iter().map(|p| format!("₹{}", p)).collect(),
        ));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rent_quorum_domain::{FactSet, Question};
    use std::path::PathBuf;

    fn report(final_response: Option<&str>) -> AnalysisReport {
        let common = FactSet {
            configurations: ["2bhk".to_string()].into_iter().collect(),
            prices: [20_000].into_iter().collect(),
            ..Default::default()
        };
        AnalysisReport::new(
            &Question::new("rent in koramangala").unwrap(),
            vec![],
            common,
            final_response.map(str::to_string),
            "now",
        )
    }

    #[test]
    fn test_success_mentions_path() {
        colored::control::set_override(false);
        let line = ConsoleFormatter::success(&PathBuf::from("llm_analysis_output.json"));
        assert!(line.contains("completed successfully"));
        assert!(line.contains("llm_analysis_output.json"));
    }

    #[test]
    fn test_summary_lists_common_patterns() {
        colored::control::set_override(false);
        let summary = ConsoleFormatter::summary(&report(Some("Most rental listings...")));
        assert!(summary.contains("rent in koramangala"));
        assert!(summary.contains("2bhk"));
        assert!(summary.contains("₹20000"));
        assert!(summary.contains("Most rental listings..."));
    }

    #[test]
    fn test_summary_without_narration() {
        colored::control::set_override(false);
        let summary = ConsoleFormatter::summary(&report(None));
        assert!(summary.contains("none"));
        assert!(!summary.contains("Most rental"));
    }
}

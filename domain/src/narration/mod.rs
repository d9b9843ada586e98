//! Natural-language summaries of fact sets
//!
//! Two families of sentences: a per-source summary that restates what one
//! model claimed, and a consensus summary that asserts cross-model
//! agreement. The consensus summary only narrates configurations and
//! prices; blocks and amenities stay in the structured output.

use crate::extraction::FactSet;
use std::fmt::Display;

/// Default locality named in consensus sentences
pub const DEFAULT_LOCALITY: &str = "Koramangala";

/// Currency marker used when printing rents
pub const CURRENCY_SYMBOL: &str = "₹";

/// Builds summary sentences for a locality
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrator {
    locality: String,
}

impl Default for Narrator {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALITY)
    }
}

impl Narrator {
    pub fn new(locality: impl Into<String>) -> Self {
        Self {
            locality: locality.into(),
        }
    }

    pub fn locality(&self) -> &str {
        &self.locality
    }

    /// Summarize a single source's facts
    ///
    /// Sentence order: configurations, price range, blocks, amenities.
    /// Returns an empty string when every category is empty.
    pub fn summarize_source(&self, facts: &FactSet) -> String {
        let mut parts = Vec::new();

        if !facts.configurations.is_empty() {
            parts.push(format!(
                "Available configurations include {} apartments.",
                join(&facts.configurations)
            ));
        }

        if let Some((min, max)) = facts.price_range() {
            parts.push(format!(
                "Monthly rents typically range from {CURRENCY_SYMBOL}{min} to {CURRENCY_SYMBOL}{max}."
            ));
        }

        if !facts.sub_blocks.is_empty() {
            parts.push(format!(
                "Popular rental blocks include Block {}.",
                join(&facts.sub_blocks)
            ));
        }

        if !facts.amenities.is_empty() {
            parts.push(format!(
                "Common amenities offered are {}.",
                join(&facts.amenities)
            ));
        }

        parts.join(" ")
    }

    /// Summarize the consensus facts
    pub fn summarize_consensus(&self, consensus: &FactSet) -> String {
        let mut lines = Vec::new();

        if !consensus.configurations.is_empty() {
            lines.push(format!(
                "Most rental listings in {} commonly offer {} apartments.",
                self.locality,
                join(&consensus.configurations)
            ));
        }

        if let Some((min, max)) = consensus.price_range() {
            lines.push(format!(
                "Across multiple models, monthly rents consistently fall between \
                 {CURRENCY_SYMBOL}{min} and {CURRENCY_SYMBOL}{max}."
            ));
        }

        lines.join(" ")
    }
}

fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

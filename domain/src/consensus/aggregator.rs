//! Cross-source fact aggregation
//!
//! Pools every source's [`FactSet`], counts how many sources report each
//! value, and keeps the values that satisfy the [`ConsensusRule`]. Each
//! category is decided independently.

use super::rule::ConsensusRule;
use crate::extraction::FactSet;
use crate::report::SourceResult;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Support counts per distinct value, for every fact category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactTally {
    /// Number of fact sets that were pooled
    pub sources: usize,
    pub configurations: BTreeMap<String, usize>,
    pub sub_blocks: BTreeMap<u8, usize>,
    pub amenities: BTreeMap<String, usize>,
    pub prices: BTreeMap<u32, usize>,
}

impl FactTally {
    /// Count every value across the given fact sets
    pub fn from_fact_sets<'a>(fact_sets: impl IntoIterator<Item = &'a FactSet>) -> Self {
        let mut tally = Self::default();
        for facts in fact_sets {
            tally.sources += 1;
            count_into(&mut tally.configurations, &facts.configurations);
            count_into(&mut tally.sub_blocks, &facts.sub_blocks);
            count_into(&mut tally.amenities, &facts.amenities);
            count_into(&mut tally.prices, &facts.prices);
        }
        tally
    }

    /// Keep only the values whose support satisfies `rule`
    pub fn consensus(&self, rule: &ConsensusRule) -> FactSet {
        FactSet {
            configurations: supported(&self.configurations, rule, self.sources),
            sub_blocks: supported(&self.sub_blocks, rule, self.sources),
            amenities: supported(&self.amenities, rule, self.sources),
            prices: supported(&self.prices, rule, self.sources),
        }
    }
}

fn count_into<T: Ord + Clone>(counts: &mut BTreeMap<T, usize>, values: &BTreeSet<T>) {
    for value in values {
        *counts.entry(value.clone()).or_insert(0) += 1;
    }
}

fn supported<T: Ord + Clone>(
    counts: &BTreeMap<T, usize>,
    rule: &ConsensusRule,
    total: usize,
) -> BTreeSet<T> {
    counts
        .iter()
        .filter(|(_, support)| rule.is_satisfied(**support, total))
        .map(|(value, _)| value.clone())
        .collect()
}

/// Computes the consensus fact set across sources
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsensusAggregator {
    rule: ConsensusRule,
}

impl ConsensusAggregator {
    pub fn new(rule: ConsensusRule) -> Self {
        Self { rule }
    }

    /// Count support for every value across the answering sources
    pub fn tally(&self, results: &[SourceResult]) -> FactTally {
        FactTally::from_fact_sets(results.iter().map(|r| &r.analysis))
    }

    /// Keep the tallied values that satisfy this aggregator's rule
    pub fn decide(&self, tally: &FactTally) -> FactSet {
        tally.consensus(&self.rule)
    }
}

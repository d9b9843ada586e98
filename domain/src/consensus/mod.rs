//! Cross-source consensus
//!
//! A fact is part of the consensus when enough answering sources report
//! it, as decided by a [`ConsensusRule`]. With the default rule that is at
//! least half of the sources, rounded up.

pub mod aggregator;
pub mod rule;

pub use aggregator::{ConsensusAggregator, FactTally};
pub use rule::ConsensusRule;

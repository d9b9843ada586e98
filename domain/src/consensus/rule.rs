//! Consensus rules for deciding which facts are corroborated
//!
//! A rule turns the number of answering sources into the minimum number of
//! sources that must report a fact for it to count as consensus.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Rule for determining cross-source agreement
///
/// - `HalfRoundedUp`: at least ⌈N/2⌉ sources (default)
/// - `Majority`: more than half of the sources
/// - `Unanimous`: every source
/// - `AtLeast(n)`: at least n sources
/// - `Percentage(p)`: at least ⌈N·p/100⌉ sources
///
/// # Example
///
/// ```
/// use rent_quorum_domain::consensus::ConsensusRule;
///
/// let rule = ConsensusRule::HalfRoundedUp;
/// assert!(rule.is_satisfied(2, 3));  // ⌈3/2⌉ = 2
/// assert!(rule.is_satisfied(2, 4));  // exactly half passes
/// assert!(!rule.is_satisfied(1, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConsensusRule {
    /// At least half, rounded up
    #[default]
    HalfRoundedUp,

    /// More than half
    Majority,

    /// All sources must agree
    Unanimous,

    /// At least n sources must agree
    AtLeast(usize),

    /// At least this percentage of sources must agree (0-100)
    Percentage(u8),
}

impl ConsensusRule {
    /// Minimum number of supporting sources, given `total` answering sources
    pub fn threshold(&self, total: usize) -> usize {
        match self {
            ConsensusRule::HalfRoundedUp => total.div_ceil(2),
            ConsensusRule::Majority => total / 2 + 1,
            ConsensusRule::Unanimous => total,
            ConsensusRule::AtLeast(n) => *n,
            ConsensusRule::Percentage(p) => (total * usize::from(*p)).div_ceil(100),
        }
    }

    /// Check whether `support` out of `total` sources satisfies the rule
    ///
    /// Never satisfied when no source answered.
    pub fn is_satisfied(&self, support: usize, total: usize) -> bool {
        if total == 0 {
            return false;
        }
        support >= self.threshold(total).max(1)
    }

    /// Get a human-readable description of this rule
    pub fn description(&self) -> String {
        match self {
            ConsensusRule::HalfRoundedUp => "at least half of the models (rounded up)".to_string(),
            ConsensusRule::Majority => "majority (more than half)".to_string(),
            ConsensusRule::Unanimous => "unanimous (every model)".to_string(),
            ConsensusRule::AtLeast(n) => format!("at least {} models", n),
            ConsensusRule::Percentage(p) => format!("at least {}% of models", p),
        }
    }
}

impl std::fmt::Display for ConsensusRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::str::FromStr for ConsensusRule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "half" | "half_rounded_up" | "halfroundedup" => Ok(ConsensusRule::HalfRoundedUp),
            "majority" => Ok(ConsensusRule::Majority),
            "unanimous" => Ok(ConsensusRule::Unanimous),
            s if s.starts_with("atleast:") || s.starts_with("at_least:") => {
                let n: usize = s
                    .split(':')
                    .nth(1)
                    .and_then(|n| n.trim().parse().ok())
                    .ok_or_else(|| DomainError::InvalidRule(format!("invalid count in {}", s)))?;
                Ok(ConsensusRule::AtLeast(n))
            }
            s if s.starts_with("percentage:") || s.ends_with('%') => {
                let num_str = s.trim_start_matches("percentage:").trim_end_matches('%');
                let p: u8 = num_str
                    .trim()
                    .parse()
                    .ok()
                    .filter(|p| *p <= 100)
                    .ok_or_else(|| {
                        DomainError::InvalidRule(format!("invalid percentage in {}", s))
                    })?;
                Ok(ConsensusRule::Percentage(p))
            }
            other => Err(DomainError::InvalidRule(format!(
                "{}. Valid: half, majority, unanimous, atleast:N, percentage:N or N%",
                other
            ))),
        }
    }
}

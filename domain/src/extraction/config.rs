//! Extraction configuration value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Default amenity vocabulary, matched as literal substrings
pub const DEFAULT_AMENITIES: [&str; 5] = ["gym", "parking", "lift", "security", "power backup"];

/// Largest BHK count recognized by the compact pipeline
pub const COMPACT_MAX_BHK: u8 = 3;

/// Lower bound of the plausible monthly-rent band
pub const DEFAULT_MIN_RENT: u32 = 10_000;

/// Upper bound of the plausible monthly-rent band
pub const DEFAULT_MAX_RENT: u32 = 300_000;

/// Tunables for the fact extractor
///
/// The default matches the full analysis pipeline (1-4 BHK). The compact
/// pipeline only recognizes 1-3 BHK, see [`ExtractionConfig::compact`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Largest N recognized in an "N BHK" token
    pub max_bhk: u8,
    /// Closed amenity vocabulary
    pub amenities: Vec<String>,
    /// Smallest accepted rent (inclusive)
    pub min_rent: u32,
    /// Largest accepted rent (inclusive)
    pub max_rent: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_bhk: 4,
            amenities: DEFAULT_AMENITIES.iter().map(|a| a.to_string()).collect(),
            min_rent: DEFAULT_MIN_RENT,
            max_rent: DEFAULT_MAX_RENT,
        }
    }
}

impl ExtractionConfig {
    /// Narrow the configuration range to the compact pipeline's 1-3 BHK,
    /// keeping the amenity vocabulary and rent band
    pub fn compact(self) -> Self {
        self.with_max_bhk(COMPACT_MAX_BHK)
    }

    pub fn with_max_bhk(mut self, max_bhk: u8) -> Self {
        self.max_bhk = max_bhk;
        self
    }

    pub fn with_rent_band(mut self, min_rent: u32, max_rent: u32) -> Self {
        self.min_rent = min_rent;
        self.max_rent = max_rent;
        self
    }

    /// The accepted rent band
    pub fn rent_band(&self) -> RangeInclusive<u32> {
        self.min_rent..=self.max_rent
    }

    /// Check the configuration for values the extractor cannot honour
    pub fn validate(&self) -> Result<(), DomainError> {
        if !(1..=9).contains(&self.max_bhk) {
            return Err(DomainError::InvalidExtractionConfig(format!(
                "max_bhk must be between 1 and 9, got {}",
                self.max_bhk
            )));
        }
        if self.min_rent > self.max_rent {
            return Err(DomainError::InvalidExtractionConfig(format!(
                "min_rent ({}) is greater than max_rent ({})",
                self.min_rent, self.max_rent
            )));
        }
        if self.amenities.iter().any(|a| a.trim().is_empty()) {
            return Err(DomainError::InvalidExtractionConfig(
                "amenity names cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ExtractionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_bhk, 4);
        assert_eq!(config.rent_band(), 10_000..=300_000);
    }

    #[test]
    fn test_compact_narrows_bhk_range() {
        let config = ExtractionConfig::default()
            .with_rent_band(12_000, 90_000)
            .compact();
        assert_eq!(config.max_bhk, 3);
        assert_eq!(config.rent_band(), 12_000..=90_000);
    }

    #[test]
    fn test_rejects_out_of_range_bhk() {
        assert!(ExtractionConfig::default().with_max_bhk(0).validate().is_err());
        assert!(ExtractionConfig::default().with_max_bhk(10).validate().is_err());
        assert!(ExtractionConfig::default().with_max_bhk(9).validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_band() {
        let config = ExtractionConfig::default().with_rent_band(50_000, 20_000);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_amenity() {
        let config = ExtractionConfig {
            amenities: vec!["gym".to_string(), " ".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

//! Pattern-based fact extraction from free-text answers

use super::config::ExtractionConfig;
use super::facts::FactSet;
use crate::core::error::DomainError;
use regex::Regex;
use std::collections::BTreeSet;
use std::ops::RangeInclusive;

/// Single digit, optional ordinal suffix, then "block". Only the digit is kept.
const BLOCK_PATTERN: &str = r"([0-9])(?:st|nd|rd|th)?\s*block";

/// Optional rupee marker, a numeral with optional separators and decimal
/// part, then an optional "thousand" scale suffix. The suffix must end a
/// word, so "12 km" is a bare 12 rather than 12000.
const PRICE_PATTERN: &str = r"₹?\s*([0-9]+(?:,[0-9]+)*(?:\.[0-9]+)?)\s*(?:(k|thousand)\b)?";

/// Turns one raw answer into a [`FactSet`]
///
/// Patterns are compiled once from an [`ExtractionConfig`]. Extraction
/// itself never fails: anything that does not match simply leaves its
/// category empty.
///
/// # Example
///
/// ```
/// use rent_quorum_domain::extraction::{ExtractionConfig, FactExtractor};
///
/// let extractor = FactExtractor::new(ExtractionConfig::default()).unwrap();
/// let facts = extractor.extract("2 BHK near 1st block with gym, rent ₹18k");
///
/// assert!(facts.configurations.contains("2bhk"));
/// assert!(facts.sub_blocks.contains(&1));
/// assert!(facts.amenities.contains("gym"));
/// assert!(facts.prices.contains(&18_000));
/// ```
#[derive(Debug, Clone)]
pub struct FactExtractor {
    rent_band: RangeInclusive<u32>,
    amenities: Vec<String>,
    configuration_pattern: Regex,
    block_pattern: Regex,
    price_pattern: Regex,
}

impl FactExtractor {
    /// Build an extractor, validating the configuration first
    pub fn new(config: ExtractionConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let configuration_pattern = compile(&format!(
            r"\b[1-{}]\s*bhk\b|\bstudio\b",
            config.max_bhk
        ))?;
        let block_pattern = compile(BLOCK_PATTERN)?;
        let price_pattern = compile(PRICE_PATTERN)?;

        let amenities = config
            .amenities
            .iter()
            .map(|a| a.trim().to_lowercase())
            .collect();

        Ok(Self {
            rent_band: config.rent_band(),
            amenities,
            configuration_pattern,
            block_pattern,
            price_pattern,
        })
    }

    /// Extract every fact category from `text`
    pub fn extract(&self, text: &str) -> FactSet {
        let text = text.to_lowercase();

        FactSet {
            configurations: self.configurations(&text),
            sub_blocks: self.sub_blocks(&text),
            amenities: self.amenities(&text),
            prices: self.prices(&text),
        }
    }

    fn configurations(&self, text: &str) -> BTreeSet<String> {
        self.configuration_pattern
            .find_iter(text)
            .map(|m| m.as_str().split_whitespace().collect::<String>())
            .collect()
    }

    fn sub_blocks(&self, text: &str) -> BTreeSet<u8> {
        self.block_pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1)?.as_str().parse().ok())
            .collect()
    }

    fn amenities(&self, text: &str) -> BTreeSet<String> {
        self.amenities
            .iter()
            .filter(|amenity| text.contains(amenity.as_str()))
            .cloned()
            .collect()
    }

    fn prices(&self, text: &str) -> BTreeSet<u32> {
        self.price_pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let numeral = caps.get(1)?.as_str();
                let thousands = caps.get(2).is_some();
                parse_amount(
                    numeral,
                    thousands,
                    *self.rent_band.start(),
                    *self.rent_band.end(),
                )
            })
            .collect()
    }
}

fn compile(pattern: &str) -> Result<Regex, DomainError> {
    Regex::new(pattern).map_err(|e| DomainError::InvalidExtractionConfig(e.to_string()))
}

/// Parse a numeral such as `1,50,000` or `18.5` and keep it only when it
/// falls inside `[min, max]` after scaling.
///
/// The band check happens before truncation, so `9999.5` is rejected even
/// though its integer part would round into a neighbouring value.
pub fn parse_amount(numeral: &str, thousands: bool, min: u32, max: u32) -> Option<u32> {
    let cleaned: String = numeral.chars().filter(|c| *c != ',').collect();
    let mut amount: f64 = cleaned.parse().ok()?;
    if thousands {
        amount *= 1000.0;
    }
    if !amount.is_finite() || amount < f64::from(min) || amount > f64::from(max) {
        return None;
    }
    Some(amount.trunc() as u32)
}

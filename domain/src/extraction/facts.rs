//! Fact set entity

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Structured facts extracted from one answer
///
/// Every category is always present and ordered canonically, so two fact
/// sets with the same members serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactSet {
    /// Apartment configurations such as "2bhk" or "studio"
    #[serde(rename = "bhk")]
    pub configurations: BTreeSet<String>,
    /// Numbered neighbourhood blocks
    #[serde(rename = "blocks")]
    pub sub_blocks: BTreeSet<u8>,
    /// Amenities from the configured vocabulary
    pub amenities: BTreeSet<String>,
    /// Monthly rents inside the plausible band, ascending
    pub prices: BTreeSet<u32>,
}

impl FactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no category has any member
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
            && self.sub_blocks.is_empty()
            && self.amenities.is_empty()
            && self.prices.is_empty()
    }

    /// Lowest and highest price, if any price was found
    pub fn price_range(&self) -> Option<(u32, u32)> {
        let min = self.prices.first()?;
        let max = self.prices.last()?;
        Some((*min, *max))
    }

    /// Total number of facts across all categories
    pub fn len(&self) -> usize {
        self.configurations.len()
            + self.sub_blocks.len()
            + self.amenities.len()
            + self.prices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fact_set() {
        let facts = FactSet::new();
        assert!(facts.is_empty());
        assert_eq!(facts.len(), 0);
        assert_eq!(facts.price_range(), None);
    }

    #[test]
    fn test_price_range() {
        let facts = FactSet {
            prices: [25_000, 18_000, 40_000].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(facts.price_range(), Some((18_000, 40_000)));
    }

    #[test]
    fn test_serializes_all_categories_even_when_empty() {
        let json = serde_json::to_value(FactSet::new()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "bhk": [], "blocks": [], "amenities": [], "prices": [] })
        );
    }

    #[test]
    fn test_serialization_is_sorted() {
        let facts = FactSet {
            configurations: ["studio", "2bhk", "1bhk"].iter().map(|s| s.to_string()).collect(),
            sub_blocks: [5, 1].into_iter().collect(),
            ..Default::default()
        };
        let json = serde_json::to_value(&facts).unwrap();
        assert_eq!(json["bhk"], serde_json::json!(["1bhk", "2bhk", "studio"]));
        assert_eq!(json["blocks"], serde_json::json!([1, 5]));
    }
}

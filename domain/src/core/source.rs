//! Source value object representing an answering model

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A model provider queried for an answer (Value Object)
///
/// The declaration order is the canonical order used for querying and for
/// ordering per-source results in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Source {
    ChatGpt,
    Gemini,
    Llama,
}

impl Source {
    /// All sources in canonical order
    pub const ALL: [Source; 3] = [Source::ChatGpt, Source::Gemini, Source::Llama];

    /// Get the display label for this source
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::ChatGpt => "ChatGPT",
            Source::Gemini => "Gemini",
            Source::Llama => "Llama",
        }
    }

    /// Get the default set of sources for an analysis run
    pub fn default_sources() -> Vec<Source> {
        Self::ALL.to_vec()
    }

    /// Drop repeated sources, keeping the first occurrence of each in place
    pub fn unique(sources: &[Source]) -> Vec<Source> {
        let mut seen = Vec::with_capacity(sources.len());
        for source in sources {
            if !seen.contains(source) {
                seen.push(*source);
            }
        }
        seen
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Source {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chatgpt" => Ok(Source::ChatGpt),
            "gemini" => Ok(Source::Gemini),
            "llama" => Ok(Source::Llama),
            other => Err(DomainError::InvalidSource(other.to_string())),
        }
    }
}

impl Serialize for Source {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Source {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

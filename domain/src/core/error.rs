//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Unknown source: {0}. Valid: ChatGPT, Gemini, Llama")]
    InvalidSource(String),

    #[error("Invalid consensus rule: {0}")]
    InvalidRule(String),

    #[error("Invalid extraction config: {0}")]
    InvalidExtractionConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_source_display() {
        let error = DomainError::InvalidSource("claude".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown source: claude. Valid: ChatGPT, Gemini, Llama"
        );
    }
}

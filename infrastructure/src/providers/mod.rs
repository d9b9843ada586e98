//! LLM provider adapters
//!
//! Each provider turns a prompt into a completion over HTTP. Failures are
//! reported as [`ProviderError`] here and collapsed into "no answer" by
//! [`RoutingAnswerProvider`] before they reach the application layer.

pub mod gemini;
pub mod openai;
pub mod routing;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiClient;
pub use openai::OpenAiCompatibleClient;
pub use routing::RoutingAnswerProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
    Groq,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Groq => "groq",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors from a single provider call
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("API key not set (expected env var {0})")]
    MissingApiKey(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response contained no text")]
    EmptyResponse,
}

/// A single-shot text completion endpoint
#[async_trait]
pub trait CompletionClient: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Model name sent to the provider
    fn model(&self) -> &str;

    /// Send `prompt` as one user message and return the reply text
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Turn a non-success response into a [`ProviderError::Status`]
pub(crate) async fn status_error(response: reqwest::Response) -> ProviderError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ProviderError::Status { status, body }
}

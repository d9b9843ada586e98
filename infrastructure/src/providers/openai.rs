//! OpenAI-compatible chat completions client
//!
//! Used for both OpenAI (ChatGPT) and Groq (Llama), which share the
//! `/v1/chat/completions` request and response shape.

use super::{CompletionClient, ProviderError, ProviderKind, status_error};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Client for an OpenAI-compatible chat completions endpoint
pub struct OpenAiCompatibleClient {
    kind: ProviderKind,
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
    max_tokens: u32,
}

impl OpenAiCompatibleClient {
    pub fn new(
        kind: ProviderKind,
        client: reqwest::Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        Self {
            kind,
            client,
            base_url: base_url.into(),
            model: model.into(),
            api_key: None,
            api_key_env: String::new(),
            max_tokens,
        }
    }

    /// Set the API key, remembering which env var it should have come from
    pub fn with_api_key(mut self, api_key: Option<String>, api_key_env: impl Into<String>) -> Self {
        self.api_key = api_key;
        self.api_key_env = api_key_env.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Pull the first choice's text out of a chat completions body
fn extract_text(body: ChatResponse) -> Result<String, ProviderError> {
    let choice = body
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::MalformedResponse("no choices".to_string()))?;

    choice
        .message
        .content
        .filter(|text| !text.trim().is_empty())
        .ok_or(ProviderError::EmptyResponse)
}

#[async_trait]
impl CompletionClient for OpenAiCompatibleClient {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::MissingApiKey(self.api_key_env.clone()))?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: self.max_tokens,
        };

        debug!("Sending chat completion to {} ({})", self.kind, self.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        extract_text(body)
    }
}

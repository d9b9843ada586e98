//! Routes each source to its provider client
//!
//! Implements the [`AnswerProvider`] port: every provider failure is logged
//! and collapsed into `None`, so the application never sees an error for a
//! single source.

use super::{CompletionClient, GeminiClient, OpenAiCompatibleClient, ProviderError, ProviderKind};
use crate::config::{FileProvidersConfig, FileSourcesConfig};
use async_trait::async_trait;
use rent_quorum_application::AnswerProvider;
use rent_quorum_domain::{Question, Source};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct RoutingAnswerProvider {
    clients: HashMap<Source, Arc<dyn CompletionClient>>,
}

impl RoutingAnswerProvider {
    pub fn new(clients: HashMap<Source, Arc<dyn CompletionClient>>) -> Self {
        Self { clients }
    }

    /// Build the standard source → provider mapping
    ///
    /// ChatGPT goes to OpenAI, Gemini to Google, Llama to Groq. All clients
    /// share one HTTP client with the configured per-request timeout.
    pub fn from_config(
        providers: &FileProvidersConfig,
        sources: &FileSourcesConfig,
    ) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(sources.timeout_seconds))
            .build()?;

        let openai = &providers.openai;
        let gemini = &providers.gemini;
        let groq = &providers.groq;

        let mut clients: HashMap<Source, Arc<dyn CompletionClient>> = HashMap::new();
        clients.insert(
            Source::ChatGpt,
            Arc::new(
                OpenAiCompatibleClient::new(
                    ProviderKind::OpenAi,
                    http.clone(),
                    &openai.base_url,
                    &openai.model,
                    sources.max_tokens,
                )
                .with_api_key(openai.resolve_api_key(), &openai.api_key_env),
            ),
        );
        clients.insert(
            Source::Gemini,
            Arc::new(
                GeminiClient::new(http.clone(), &gemini.base_url, &gemini.model)
                    .with_api_key(gemini.resolve_api_key(), &gemini.api_key_env),
            ),
        );
        clients.insert(
            Source::Llama,
            Arc::new(
                OpenAiCompatibleClient::new(
                    ProviderKind::Groq,
                    http,
                    &groq.base_url,
                    &groq.model,
                    sources.max_tokens,
                )
                .with_api_key(groq.resolve_api_key(), &groq.api_key_env),
            ),
        );

        Ok(Self::new(clients))
    }
}

#[async_trait]
impl AnswerProvider for RoutingAnswerProvider {
    async fn fetch(&self, source: Source, question: &Question) -> Option<String> {
        let Some(client) = self.clients.get(&source) else {
            warn!("No provider configured for {}", source);
            return None;
        };

        debug!(
            "Querying {} via {} ({})",
            source,
            client.kind(),
            client.model()
        );

        match client.complete(question.content()).await {
            Ok(text) => {
                info!("{} responded via {}", source, client.kind());
                Some(text)
            }
            Err(e) => {
                warn!("{} failed via {}: {}", source, client.kind(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockClient {
        kind: ProviderKind,
        reply: Result<&'static str, &'static str>,
    }

    impl MockClient {
        fn ok(kind: ProviderKind, text: &'static str) -> Arc<dyn CompletionClient> {
            Arc::new(Self {
                kind,
                reply: Ok(text),
            })
        }

        fn failing(kind: ProviderKind, status: &'static str) -> Arc<dyn CompletionClient> {
            Arc::new(Self {
                kind,
                reply: Err(status),
            })
        }
    }

    #[async_trait]
    impl CompletionClient for MockClient {
        fn kind(&self) -> ProviderKind {
            self.kind
        }

        fn model(&self) -> &str {
            "mock"
        }

        async fn complete(&self, _prompt: &str) -> Result<String, ProviderError> {
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(body) => Err(ProviderError::Status {
                    status: 429,
                    body: body.to_string(),
                }),
            }
        }
    }

    fn question() -> Question {
        Question::new("rent in koramangala").unwrap()
    }

    #[tokio::test]
    async fn routes_to_the_source_client() {
        let mut clients = HashMap::new();
        clients.insert(Source::ChatGpt, MockClient::ok(ProviderKind::OpenAi, "from openai"));
        clients.insert(Source::Llama, MockClient::ok(ProviderKind::Groq, "from groq"));
        let provider = RoutingAnswerProvider::new(clients);

        assert_eq!(
            provider.fetch(Source::ChatGpt, &question()).await.as_deref(),
            Some("from openai")
        );
        assert_eq!(
            provider.fetch(Source::Llama, &question()).await.as_deref(),
            Some("from groq")
        );
    }

    #[tokio::test]
    async fn provider_error_becomes_none() {
        let mut clients = HashMap::new();
        clients.insert(Source::Gemini, MockClient::failing(ProviderKind::Gemini, "quota exceeded"));
        let provider = RoutingAnswerProvider::new(clients);

        assert!(provider.fetch(Source::Gemini, &question()).await.is_none());
    }

    #[tokio::test]
    async fn unconfigured_source_becomes_none() {
        let provider = RoutingAnswerProvider::new(HashMap::new());
        assert!(provider.fetch(Source::Llama, &question()).await.is_none());
    }

    #[tokio::test]
    async fn missing_keys_yield_no_answer() {
        let mut providers = FileProvidersConfig::default();
        providers.openai.api_key_env = "RENT_QUORUM_TEST_UNSET_OPENAI".to_string();
        providers.gemini.api_key_env = "RENT_QUORUM_TEST_UNSET_GEMINI".to_string();
        providers.groq.api_key_env = "RENT_QUORUM_TEST_UNSET_GROQ".to_string();

        let provider =
            RoutingAnswerProvider::from_config(&providers, &FileSourcesConfig::default()).unwrap();

        for source in Source::ALL {
            assert!(provider.fetch(source, &question()).await.is_none());
        }
    }
}

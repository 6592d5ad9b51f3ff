//! Groq provider.
//!
//! Groq serves an OpenAI-compatible chat completions endpoint, so this module
//! only supplies configuration on top of [`CompletionClient`].

use async_trait::async_trait;

use crate::completions::{CompletionClient, CompletionProviderConfig};
use crate::core::{
    Completion, CompletionRequest, Credential, HttpClientConfig, LlmError, LlmProvider,
};
use crate::provider::constants::groq;

pub struct GroqConfig {
    pub api_key: Credential,
    pub base_url: String,
    pub http_config: HttpClientConfig,
}

impl GroqConfig {
    pub fn new(api_key: Credential) -> Self {
        Self {
            api_key,
            base_url: groq::API_BASE.to_string(),
            http_config: HttpClientConfig::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }
}

impl std::fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field("http_config", &self.http_config)
            .finish()
    }
}

impl CompletionProviderConfig for GroqConfig {
    fn provider(&self) -> super::Provider {
        super::Provider::Groq
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> &str {
        groq::CHAT_COMPLETIONS_ENDPOINT
    }

    fn auth_header(&self) -> (String, String) {
        (
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key.expose()),
        )
    }

    fn http_config(&self) -> HttpClientConfig {
        self.http_config.clone()
    }
}

pub struct GroqClient {
    completion_client: CompletionClient<GroqConfig>,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Result<Self, LlmError> {
        Ok(Self {
            completion_client: CompletionClient::new(config)?,
        })
    }

    /// Client against the public Groq endpoint with default HTTP settings.
    pub fn from_credential(api_key: Credential) -> Result<Self, LlmError> {
        Self::new(GroqConfig::new(api_key))
    }

    pub fn config(&self) -> &GroqConfig {
        &self.completion_client.config
    }
}

#[async_trait]
impl LlmProvider for GroqClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        self.completion_client.complete(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential() -> Credential {
        Credential::new("gsk_test").unwrap()
    }

    #[test]
    fn defaults_to_public_endpoint() {
        let config = GroqConfig::new(credential());
        assert_eq!(config.base_url(), "https://api.groq.com/openai/v1");
        assert_eq!(config.endpoint(), "/chat/completions");
        assert_eq!(config.provider(), crate::Provider::Groq);
    }

    #[test]
    fn auth_header_is_bearer_token() {
        let (name, value) = GroqConfig::new(credential()).auth_header();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer gsk_test");
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = GroqConfig::new(credential()).with_base_url("http://localhost:8080/v1/");
        assert_eq!(config.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn debug_does_not_leak_key() {
        let config = GroqConfig::new(credential());
        assert!(!format!("{config:?}").contains("gsk_test"));
    }

    #[tokio::test]
    async fn client_builds_with_present_key() {
        let client = GroqClient::from_credential(credential()).unwrap();
        assert_eq!(client.config().api_key.expose(), "gsk_test");
    }
}

//! Generic client for OpenAI-compatible chat completions endpoints.

use crate::{
    Provider,
    core::{
        Completion, CompletionRequest, HttpClient, HttpClientConfig, LanguageModelUsage,
        LlmError, ResponseMetadata,
    },
};

use super::{request::ChatCompletionRequest, response::ChatCompletionResponse};

/// Configuration trait for providers that speak the chat completions API.
pub trait CompletionProviderConfig {
    /// Model Provider
    fn provider(&self) -> Provider;

    /// Base URL for the API (e.g., `https://api.groq.com/openai/v1`)
    fn base_url(&self) -> &str;

    /// API endpoint for completions (e.g., `/chat/completions`)
    fn endpoint(&self) -> &str;

    /// Authentication header as (header_name, header_value) tuple
    fn auth_header(&self) -> (String, String);

    /// Additional headers to include with each request
    fn extra_headers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::default()
    }
}

pub struct CompletionClient<P: CompletionProviderConfig> {
    pub config: P,
    http: HttpClient,
}

impl<P: CompletionProviderConfig> CompletionClient<P> {
    pub fn new(config: P) -> Result<Self, LlmError> {
        let http = HttpClient::new(config.http_config())?;
        Ok(Self { config, http })
    }

    #[tracing::instrument(
        name = "http_request",
        skip(self, request),
        fields(
            base_url = %self.config.base_url(),
            endpoint = %self.config.endpoint(),
            model = %request.model
        ),
        err
    )]
    pub async fn make_api_request(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmError> {
        let url = format!("{}{}", self.config.base_url(), self.config.endpoint());

        let mut headers = vec![self.config.auth_header()];
        headers.extend(self.config.extra_headers());

        self.http.post_json(&url, &headers, &request).await
    }

    /// Send `request` and reduce the answer to its first choice.
    pub async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError> {
        let api_response = self.make_api_request(request.into()).await?;
        convert_to_completion(api_response, self.config.provider())
    }
}

fn convert_to_completion(
    res: ChatCompletionResponse,
    provider: Provider,
) -> Result<Completion, LlmError> {
    let choice = res.choices.into_iter().next().ok_or_else(|| LlmError::Parse {
        message: "No choices in response".to_string(),
        source: "empty `choices` array".into(),
    })?;

    let text = choice.message.content.ok_or_else(|| LlmError::Parse {
        message: "No content in message".to_string(),
        source: "`message.content` is null".into(),
    })?;

    tracing::debug!(
        finish_reason = choice.finish_reason.as_deref().unwrap_or("unknown"),
        "Received completion"
    );

    Ok(Completion {
        text,
        usage: res.usage.map(|usage| LanguageModelUsage {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }),
        metadata: ResponseMetadata {
            provider,
            model: res.model,
            id: res.id,
            finish_reason: choice.finish_reason,
        },
    })
}

//! Shared HTTP transport for all providers.

use std::time::Duration;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::error::LlmError;

/// Configuration for the underlying HTTP client.
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Total request timeout. `None` keeps the client default.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

/// Thin wrapper over `reqwest::Client` that maps failures onto [`LlmError`].
///
/// Every call is a single attempt.
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, LlmError> {
        let default_ua = format!("groq-prompt/{}", env!("CARGO_PKG_VERSION"));
        let ua = config.user_agent.as_deref().unwrap_or(&default_ua);

        let mut builder = reqwest::Client::builder().user_agent(ua);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            LlmError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
        })?;

        Ok(Self { client })
    }

    /// POST `body` as JSON and decode the JSON answer.
    ///
    /// Non-2xx statuses become [`LlmError::Api`], using the service's
    /// `error.message` when the body carries one.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<Res, LlmError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let mut req_builder = self.client.post(url).json(body);
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let res = req_builder.send().await.map_err(|e| {
            warn!(error = %e, "HTTP request failed");
            LlmError::Network {
                message: "Failed to complete request".to_string(),
                source: Box::new(e),
            }
        })?;

        let status = res.status();
        let response_text = res.text().await.map_err(|e| LlmError::Network {
            message: "Failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        if !status.is_success() {
            warn!(status = %status, "API returned error status");
            let detail = error_message(&response_text);
            let message = if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                format!("Rate limited ({status}): {detail}")
            } else {
                format!("{status}: {detail}")
            };
            return Err(LlmError::Api {
                message,
                status_code: Some(status.as_u16()),
            });
        }

        debug!(status = %status, bytes = response_text.len(), "HTTP request successful");

        serde_json::from_str(&response_text).map_err(|e| LlmError::Parse {
            message: "Failed to parse API response".to_string(),
            source: Box::new(e),
        })
    }
}

/// Pull `error.message` out of an OpenAI-style error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                body.to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_structured_body() {
        let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#;
        assert_eq!(error_message(body), "Invalid API Key");
    }

    #[test]
    fn error_message_falls_back_to_raw_text() {
        assert_eq!(error_message("upstream timeout"), "upstream timeout");
        assert_eq!(error_message(""), "Unknown error");
    }
}

use async_trait::async_trait;

use super::{
    error::LlmError,
    types::{Completion, CompletionRequest},
};

/// A hosted model that turns a request into one completion.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion, LlmError>;

    /// Send `prompt` as a single user message to `model` and return the text.
    async fn generate_text(&self, model: &str, prompt: &str) -> Result<String, LlmError> {
        let completion = self
            .complete(CompletionRequest::single_prompt(model, prompt))
            .await?;
        Ok(completion.text)
    }
}

use serde::Serialize;

use crate::core::{ChatRole, CompletionRequest};

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: ChatMessageRole,
    pub content: String,
}

impl From<CompletionRequest> for ChatCompletionRequest {
    fn from(request: CompletionRequest) -> Self {
        let generation = request.generation_config.unwrap_or_default();
        let messages = request
            .messages
            .into_iter()
            .map(|m| ChatMessage {
                role: match m.role {
                    ChatRole::System => ChatMessageRole::System,
                    ChatRole::User => ChatMessageRole::User,
                    ChatRole::Assistant => ChatMessageRole::Assistant,
                },
                content: m.content,
            })
            .collect();

        Self {
            model: request.model,
            messages,
            temperature: generation.temperature,
            max_tokens: generation.max_tokens,
            top_p: generation.top_p,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GenerationConfig;
    use serde_json::json;

    #[test]
    fn single_prompt_serializes_without_sampling_fields() {
        let request: ChatCompletionRequest =
            CompletionRequest::single_prompt("llama3-8b-8192", "hello").into();
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "model": "llama3-8b-8192",
                "messages": [{ "role": "user", "content": "hello" }]
            })
        );
    }

    #[test]
    fn generation_config_is_forwarded() {
        let mut request = CompletionRequest::single_prompt("llama3-8b-8192", "hello");
        request.generation_config = Some(GenerationConfig {
            max_tokens: Some(1000),
            temperature: Some(0.5),
            top_p: None,
        });

        let body = serde_json::to_value(ChatCompletionRequest::from(request)).unwrap();
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["temperature"], 0.5);
        assert!(body.get("top_p").is_none());
    }
}

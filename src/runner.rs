//! One question, one answer.

use std::io::Write;

use crate::core::{
    ApiKey, CompletionRequest, Credential, GenerationConfig, LlmError, LlmProvider, env_var,
};
use crate::provider::{GroqClient, GroqConfig, Provider};

/// The question sent on every run.
pub const PROMPT: &str = "What is agentic AI? give me it in three lines";

/// Groq model the question is sent to.
pub const MODEL: &str = Provider::Groq.default_model();

/// Sampling temperature sent with the question.
pub const TEMPERATURE: f32 = 0.7;

pub struct PromptRunner<P> {
    provider: P,
}

impl<P: LlmProvider> PromptRunner<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Ask [`PROMPT`] once and write the answer plus a newline to `out`.
    ///
    /// Nothing is written when the call fails.
    #[tracing::instrument(name = "prompt_run", skip_all, fields(model = MODEL), err)]
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<(), LlmError> {
        let completion = self.provider.complete(request()).await?;
        let text = completion.text;
        tracing::debug!(chars = text.len(), "Writing completion");

        writeln!(out, "{text}")?;
        out.flush()?;
        Ok(())
    }
}

/// The one request every run sends.
pub fn request() -> CompletionRequest {
    CompletionRequest {
        generation_config: Some(GenerationConfig {
            temperature: Some(TEMPERATURE),
            ..Default::default()
        }),
        ..CompletionRequest::single_prompt(MODEL, PROMPT)
    }
}

/// Resolve the key through `lookup`, build a Groq client, and run once.
///
/// A missing key fails here, before any client or connection exists.
pub async fn run_with_env<F, W>(
    lookup: F,
    config: impl FnOnce(Credential) -> GroqConfig,
    out: &mut W,
) -> Result<(), LlmError>
where
    F: FnOnce(&str) -> Option<String>,
    W: Write,
{
    let credential = ApiKey::Default.resolve_with(Provider::Groq, lookup)?;
    let client = GroqClient::new(config(credential))?;
    PromptRunner::new(client).run(out).await
}

/// Default wiring used by the binary.
///
/// Reads the key from the process environment and talks to the public Groq
/// endpoint unless `GROQ_BASE_URL` points elsewhere.
pub async fn run_default<W: Write>(out: &mut W) -> Result<(), LlmError> {
    let provider = Provider::Groq;
    let api_key = env_var(provider.default_api_key_env_var())?;
    let base_url = env_var(provider.base_url_env_var())?.filter(|url| !url.trim().is_empty());

    run_with_env(
        |_| api_key,
        |credential| match base_url {
            Some(url) => GroqConfig::new(credential).with_base_url(url),
            None => GroqConfig::new(credential),
        },
        out,
    )
    .await
}

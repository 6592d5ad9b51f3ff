//! # groq-prompt
//!
//! Ask a hosted Groq model one fixed question and print the answer.
//!
//! The binary reads `GROQ_API_KEY` (a `.env` file in the working directory is
//! honoured), sends [`runner::PROMPT`] to [`runner::MODEL`] once, and writes the
//! completion to stdout. Any failure exits non-zero with nothing on stdout.
//!
//! The same pieces are usable as a library:
//!
//! ```rust,no_run
//! use groq_prompt::{ApiKey, GroqClient, LlmProvider, Provider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credential = ApiKey::Default.resolve(Provider::Groq)?;
//!     let client = GroqClient::from_credential(credential)?;
//!     let text = client
//!         .generate_text("llama3-8b-8192", "Say hello in one word.")
//!         .await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

pub mod completions;
pub mod core;
pub mod provider;
pub mod runner;

pub use crate::core::{
    ApiKey, ChatRole, Completion, CompletionRequest, Credential, ErrorKind, GenerationConfig,
    HttpClientConfig, LlmError, LlmProvider, Message,
};
pub use crate::provider::{GroqClient, GroqConfig, Provider};
pub use crate::runner::PromptRunner;

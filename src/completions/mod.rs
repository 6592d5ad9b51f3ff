//! Chat completions API abstraction shared by OpenAI-compatible providers.

pub mod client;
pub(crate) mod request;
pub(crate) mod response;

pub use client::{CompletionClient, CompletionProviderConfig};

pub mod config;
pub mod error;
pub mod http;
pub mod traits;
pub mod types;

pub use config::{ApiKey, Credential, env_var, load_env_file};
pub use error::{ErrorKind, LlmError};
pub use http::{HttpClient, HttpClientConfig};
pub use traits::LlmProvider;
pub use types::{
    ChatRole, Completion, CompletionRequest, GenerationConfig, LanguageModelUsage, Message,
    ResponseMetadata,
};

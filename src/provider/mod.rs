mod constants;
pub(crate) mod groq;

pub use groq::{GroqClient, GroqConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Groq,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Groq => write!(f, "Groq"),
        }
    }
}

impl Provider {
    /// Get the default environment variable name for this provider's API key
    pub const fn default_api_key_env_var(&self) -> &'static str {
        match self {
            Provider::Groq => constants::groq::API_KEY_ENV_VAR,
        }
    }

    /// Environment variable that overrides the API base URL
    pub const fn base_url_env_var(&self) -> &'static str {
        match self {
            Provider::Groq => constants::groq::BASE_URL_ENV_VAR,
        }
    }

    pub const fn default_model(&self) -> &'static str {
        match self {
            Provider::Groq => constants::groq::DEFAULT_MODEL,
        }
    }
}

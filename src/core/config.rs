//! Credential handling.
//!
//! The key is resolved once at startup and then passed explicitly into the
//! provider configuration. Nothing below the entry point reads the process
//! environment on its own.

use crate::provider::Provider;

use super::error::LlmError;

/// Opaque service token. Never empty.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Result<Self, LlmError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(LlmError::ProviderConfiguration(
                "API key is empty.".to_string(),
            ));
        }
        Ok(Self(token))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(****)")
    }
}

/// Where the API key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKey {
    /// The provider's conventional environment variable, e.g. `GROQ_API_KEY`.
    Default,
    Custom(String),
}

impl ApiKey {
    /// Resolve against the real process environment.
    pub fn resolve(&self, provider: Provider) -> Result<Credential, LlmError> {
        let value = match self {
            ApiKey::Default => env_var(provider.default_api_key_env_var())?,
            ApiKey::Custom(_) => None,
        };
        self.resolve_with(provider, |_| value)
    }

    /// Resolve through `lookup` instead of the process environment.
    pub fn resolve_with<F>(&self, provider: Provider, lookup: F) -> Result<Credential, LlmError>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let env_var = provider.default_api_key_env_var();
        let raw = match self {
            ApiKey::Default => lookup(env_var),
            ApiKey::Custom(key) => Some(key.clone()),
        };

        raw.filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LlmError::ProviderConfiguration(format!("{env_var} not set.")))
            .and_then(Credential::new)
    }
}

/// Read `name` from the process environment.
///
/// Unset is `Ok(None)`. A value that is set but not valid UTF-8 is an error
/// rather than being reported as missing.
pub fn env_var(name: &str) -> Result<Option<String>, LlmError> {
    env_value(name, std::env::var(name))
}

fn env_value(
    name: &str,
    value: Result<String, std::env::VarError>,
) -> Result<Option<String>, LlmError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(LlmError::ProviderConfiguration(format!(
            "{name} is set but is not valid UTF-8."
        ))),
    }
}

/// Load a `.env` file from the working directory if one exists.
///
/// Variables already present in the environment win over the file.
pub fn load_env_file() {
    match dotenv::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded environment file"),
        Err(e) if e.not_found() => tracing::trace!("No .env file found"),
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
    }
}

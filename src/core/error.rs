use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Coarse classification of an [`LlmError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected before any network activity (missing credential, bad client setup).
    Configuration,
    /// The remote call could not be completed or returned an unusable answer.
    Network,
    /// The completion could not be written out.
    Output,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "ConfigurationError"),
            ErrorKind::Network => write!(f, "NetworkError"),
            ErrorKind::Output => write!(f, "OutputError"),
        }
    }
}

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxedSource,
    },

    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxedSource,
    },

    #[error("Failed to write completion: {0}")]
    Output(#[from] std::io::Error),
}

impl LlmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LlmError::ProviderConfiguration(_) => ErrorKind::Configuration,
            LlmError::Network { .. } | LlmError::Api { .. } | LlmError::Parse { .. } => {
                ErrorKind::Network
            }
            LlmError::Output(_) => ErrorKind::Output,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            LlmError::Api {
                status_code: Some(429),
                ..
            }
        )
    }
}

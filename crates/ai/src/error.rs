//! Quote generator error types.

use commitdaily_core::Error as CoreError;
use thiserror::Error;

/// Quote generator errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// No API key configured for the provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Transport or HTTP-level provider failure.
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider answered, but not with a usable quote.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The provider did not answer in time.
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// Local failure before any request is sent, e.g. building the HTTP client.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AiError {
    /// Create a new provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new invalid response error.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }
}

/// Error code for programmatic handling.
impl AiError {
    pub fn code(&self) -> &'static str {
        match self {
            AiError::MissingApiKey(_) => "MISSING_API_KEY",
            AiError::Provider(_) => "PROVIDER_ERROR",
            AiError::InvalidResponse(_) => "INVALID_RESPONSE",
            AiError::Timeout(_) => "TIMEOUT",
            AiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AiError::InvalidResponse(err.to_string())
        } else {
            AiError::Provider(err.to_string())
        }
    }
}

impl From<AiError> for CoreError {
    fn from(err: AiError) -> Self {
        CoreError::QuoteGeneration(format!("[{}] {}", err.code(), err))
    }
}

//! Error types for the Nomora generation core.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Classification of a generation failure as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    ConfigError,
    ProviderUnavailable,
    InvalidResponseShape,
    QuotaExceeded,
    RateLimited,
    Timeout,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ConfigError => "config_error",
            ErrorKind::ProviderUnavailable => "provider_unavailable",
            ErrorKind::InvalidResponseShape => "invalid_response_shape",
            ErrorKind::QuotaExceeded => "quota_exceeded",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed error handed to the caller of the orchestrator.
///
/// `retryable` is always false: the core never retries and makes no promise
/// that repeating the call would help.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct GenerationError {
    pub kind: ErrorKind,
    pub message: String,
    pub retryable: bool,
}

impl GenerationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigError, message)
    }

    pub fn provider_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ProviderUnavailable, message)
    }

    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidResponseShape, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }
}

/// Failure reported by a backend adapter.
///
/// Adapters tag the failure at the boundary (HTTP status, transport error)
/// so that classification downstream is a lookup rather than text matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Provider authentication failed: {0}")]
    AuthFailed(String),

    #[error("Provider quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("Provider rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Provider request timed out: {0}")]
    Timeout(String),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Provider request failed: {0}")]
    RequestFailed(String),

    #[error("Provider returned an unreadable response: {0}")]
    InvalidResponse(String),

    #[error("Provider returned no content: {0}")]
    EmptyResponse(String),
}

impl From<ProviderError> for GenerationError {
    fn from(err: ProviderError) -> Self {
        let kind = match &err {
            ProviderError::AuthFailed(_) => ErrorKind::ConfigError,
            ProviderError::QuotaExceeded(_) => ErrorKind::QuotaExceeded,
            ProviderError::RateLimited(_) => ErrorKind::RateLimited,
            ProviderError::Timeout(_) => ErrorKind::Timeout,
            ProviderError::Unavailable(_) => ErrorKind::ProviderUnavailable,
            ProviderError::RequestFailed(_)
            | ProviderError::InvalidResponse(_)
            | ProviderError::EmptyResponse(_) => ErrorKind::Unknown,
        };
        GenerationError::new(kind, err.to_string())
    }
}

impl From<config::ConfigError> for GenerationError {
    fn from(err: config::ConfigError) -> Self {
        GenerationError::config(err.to_string())
    }
}

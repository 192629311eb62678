//! Backend provider abstraction
//!
//! A single capability interface over the supported LLM backends (OpenAI,
//! OpenRouter, Gemini) plus a deterministic Mock. The orchestrator only ever
//! talks to [`CompletionBackend`]; wire formats, authentication and model
//! selection stay inside the adapters.

use crate::error::ProviderError;
use crate::types::ChatMessage;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub mod gemini;
pub mod mock;
pub mod openai;
pub mod registry;
pub mod settings;

pub use gemini::GeminiClient;
pub use mock::MockBackend;
pub use openai::OpenAICompatibleClient;
pub use registry::ProviderRegistry;
pub use settings::{BackendSettings, ProviderSettings};

/// Backend kinds selectable through configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[serde(rename = "openai")]
    OpenAI,
    Gemini,
    #[serde(rename = "openrouter")]
    OpenRouter,
    Mock,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::OpenAI,
        ProviderKind::Gemini,
        ProviderKind::OpenRouter,
        ProviderKind::Mock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenRouter => "openrouter",
            ProviderKind::Mock => "mock",
        }
    }

    pub fn requires_credential(&self) -> bool {
        !matches!(self, ProviderKind::Mock)
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "gpt-4o-mini",
            ProviderKind::Gemini => "gemini-2.5-flash-lite",
            ProviderKind::OpenRouter => "deepseek/deepseek-chat-v3.1:free",
            ProviderKind::Mock => "mock",
        }
    }

    pub fn default_endpoint(&self) -> Option<&'static str> {
        match self {
            ProviderKind::OpenAI => Some("https://api.openai.com/v1"),
            ProviderKind::Gemini => Some("https://generativelanguage.googleapis.com/v1beta"),
            ProviderKind::OpenRouter => Some("https://openrouter.ai/api/v1"),
            ProviderKind::Mock => None,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown provider '{}' (expected one of: openai, gemini, openrouter, mock)",
                    s
                )
            })
    }
}

/// Sampling options passed with each completion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionOptions {
    pub const PLAN_SUGGESTION: CompletionOptions = CompletionOptions {
        temperature: 0.7,
        max_tokens: 2000,
    };
    pub const CATCHPHRASE: CompletionOptions = CompletionOptions {
        temperature: 0.8,
        max_tokens: 200,
    };
    pub const CHAT_REPLY: CompletionOptions = CompletionOptions {
        temperature: 0.8,
        max_tokens: 300,
    };
}

/// Capability every backend handle provides.
///
/// Implementations hold no per-call mutable state and are shared across
/// concurrent calls.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Single-turn completion
    async fn complete(
        &self,
        system: &str,
        user: &str,
        options: &CompletionOptions,
    ) -> Result<String, ProviderError>;

    /// Multi-turn completion; roles are mapped per backend convention
    async fn complete_chat(
        &self,
        system: &str,
        history: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<String, ProviderError>;

    fn provider_name(&self) -> &str;

    fn model_name(&self) -> &str;
}

// Helper function to map transport errors to ProviderError
fn map_http_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ProviderError::Unavailable(format!("Connection error: {}", error))
    } else if error.is_decode() {
        ProviderError::InvalidResponse(format!("Failed to decode response: {}", error))
    } else {
        ProviderError::RequestFailed(format!("HTTP error: {}", error))
    }
}

// Map a non-success HTTP status (and its body) to a tagged ProviderError
fn map_status(status: StatusCode, body: &str) -> ProviderError {
    let lower = body.to_lowercase();
    match status.as_u16() {
        401 | 403 => ProviderError::AuthFailed(format!("Authentication failed ({}): {}", status, body)),
        402 => ProviderError::QuotaExceeded(format!("Payment required ({}): {}", status, body)),
        429 if lower.contains("quota") || lower.contains("billing") => {
            ProviderError::QuotaExceeded(format!("Quota exhausted ({}): {}", status, body))
        }
        429 => ProviderError::RateLimited(format!("Rate limit exceeded ({}): {}", status, body)),
        408 | 504 => ProviderError::Timeout(format!("Upstream timeout ({}): {}", status, body)),
        _ => ProviderError::RequestFailed(format!("Request failed with status {}: {}", status, body)),
    }
}

async fn error_from_response(response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    map_status(status, &body)
}

const PROVIDER_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const PROVIDER_HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

fn build_provider_http_client() -> Result<Client, ProviderError> {
    Client::builder()
        .connect_timeout(PROVIDER_HTTP_CONNECT_TIMEOUT)
        .timeout(PROVIDER_HTTP_REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ProviderError::Unavailable(format!("Failed to create HTTP client: {}", e)))
}

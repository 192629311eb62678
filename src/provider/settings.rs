//! Provider settings: backend selector and per-kind credentials.

use super::ProviderKind;
use serde::{Deserialize, Serialize};

/// Credentials and overrides for one backend kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    /// Overrides the kind's default model
    #[serde(default)]
    pub model: Option<String>,
    /// Overrides the kind's default base URL
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl BackendSettings {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// API key, if present and not blank
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(model) = &self.model {
            if model.trim().is_empty() {
                return Err("Model cannot be empty".to_string());
            }
        }
        if let Some(endpoint) = &self.endpoint {
            let url = reqwest::Url::parse(endpoint)
                .map_err(|e| format!("Invalid endpoint URL '{}': {}", endpoint, e))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(format!(
                    "Endpoint URL '{}' must use http or https",
                    endpoint
                ));
            }
        }
        Ok(())
    }
}

/// Backend selection consumed once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSettings {
    #[serde(default = "default_kind")]
    pub kind: ProviderKind,
    #[serde(default)]
    pub openai: BackendSettings,
    #[serde(default)]
    pub gemini: BackendSettings,
    #[serde(default)]
    pub openrouter: BackendSettings,
}

fn default_kind() -> ProviderKind {
    ProviderKind::OpenAI
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            openai: BackendSettings::default(),
            gemini: BackendSettings::default(),
            openrouter: BackendSettings::default(),
        }
    }
}

impl ProviderSettings {
    pub fn mock() -> Self {
        Self {
            kind: ProviderKind::Mock,
            ..Self::default()
        }
    }

    /// Settings block for a kind; `None` for the mock, which takes none.
    pub fn backend(&self, kind: ProviderKind) -> Option<&BackendSettings> {
        match kind {
            ProviderKind::OpenAI => Some(&self.openai),
            ProviderKind::Gemini => Some(&self.gemini),
            ProviderKind::OpenRouter => Some(&self.openrouter),
            ProviderKind::Mock => None,
        }
    }

    pub fn backend_mut(&mut self, kind: ProviderKind) -> Option<&mut BackendSettings> {
        match kind {
            ProviderKind::OpenAI => Some(&mut self.openai),
            ProviderKind::Gemini => Some(&mut self.gemini),
            ProviderKind::OpenRouter => Some(&mut self.openrouter),
            ProviderKind::Mock => None,
        }
    }

    /// Check the selected kind has its credential and every block is well formed.
    pub fn validate(&self) -> Result<(), String> {
        if self.kind.requires_credential()
            && self.backend(self.kind).and_then(BackendSettings::credential).is_none()
        {
            return Err(format!(
                "API key is required when provider kind is '{}'",
                self.kind
            ));
        }
        for kind in ProviderKind::ALL {
            if let Some(backend) = self.backend(kind) {
                backend
                    .validate()
                    .map_err(|e| format!("Provider '{}': {}", kind, e))?;
            }
        }
        Ok(())
    }
}

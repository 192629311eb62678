//! Provider registry: the process-lifetime set of backend handles.
//!
//! Built once at startup from [`ProviderSettings`] and shared read-only
//! afterwards. The mock handle is always present.

use super::{
    CompletionBackend, GeminiClient, MockBackend, OpenAICompatibleClient, ProviderKind,
    ProviderSettings,
};
use crate::error::{GenerationError, ProviderError};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ProviderRegistry {
    active: ProviderKind,
    backends: HashMap<ProviderKind, Arc<dyn CompletionBackend>>,
}

impl ProviderRegistry {
    /// Construct every backend whose credential is present.
    ///
    /// Fails with `ConfigError` when the selected kind lacks its credential;
    /// callers treat that as fatal at startup.
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, GenerationError> {
        settings.validate().map_err(GenerationError::config)?;

        let mut backends: HashMap<ProviderKind, Arc<dyn CompletionBackend>> = HashMap::new();
        backends.insert(ProviderKind::Mock, Arc::new(MockBackend::new()));

        for kind in ProviderKind::ALL {
            let Some(backend_settings) = settings.backend(kind) else {
                continue;
            };
            let Some(api_key) = backend_settings.credential() else {
                debug!(provider = %kind, "No credential configured; backend not constructed");
                continue;
            };
            let model = backend_settings
                .model
                .clone()
                .unwrap_or_else(|| kind.default_model().to_string());
            let endpoint = backend_settings
                .endpoint
                .clone()
                .or_else(|| kind.default_endpoint().map(str::to_string))
                .unwrap_or_default();

            let handle = build_backend(kind, model, api_key.to_string(), endpoint)
                .map_err(|e| GenerationError::config(format!("Failed to build {} backend: {}", kind, e)))?;
            backends.insert(kind, handle);
        }

        info!(
            provider = %settings.kind,
            configured = backends.len(),
            "Provider registry initialized"
        );

        Ok(Self {
            active: settings.kind,
            backends,
        })
    }

    /// Registry whose active backend is the given handle. The mock stays available.
    pub fn with_backend(kind: ProviderKind, backend: Arc<dyn CompletionBackend>) -> Self {
        let mut backends: HashMap<ProviderKind, Arc<dyn CompletionBackend>> = HashMap::new();
        backends.insert(ProviderKind::Mock, Arc::new(MockBackend::new()));
        backends.insert(kind, backend);
        Self {
            active: kind,
            backends,
        }
    }

    /// Registry that selects `kind` without constructing a handle for it.
/// The mock stays available unless it is the selected kind.
    pub fn without_backend(kind: ProviderKind) -> Self {
        let mut backends: HashMap<ProviderKind, Arc<dyn CompletionBackend>> = HashMap::new();
        if kind != ProviderKind::Mock {
            backends.insert(ProviderKind::Mock, Arc::new(MockBackend::new()));
        }
        Self {
            active: kind,
            backends,
        }
    }

    pub fn mock() -> Self {
        Self::with_backend(ProviderKind::Mock, Arc::new(MockBackend::new()))
    }

    pub fn active_kind(&self) -> ProviderKind {
        self.active
    }

    pub fn is_mock(&self) -> bool {
        self.active == ProviderKind::Mock
    }

    /// Handle for the configured kind, or `ProviderUnavailable`.
    pub fn active_backend(&self) -> Result<Arc<dyn CompletionBackend>, GenerationError> {
        self.get(self.active).ok_or_else(|| {
            GenerationError::provider_unavailable(format!(
                "No backend constructed for provider '{}'",
                self.active
            ))
        })
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn CompletionBackend>> {
        self.backends.get(&kind).cloned()
    }

    /// Constructed kinds in declaration order
    pub fn configured_kinds(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| self.backends.contains_key(kind))
            .collect()
    }
}

fn build_backend(
    kind: ProviderKind,
    model: String,
    api_key: String,
    endpoint: String,
) -> Result<Arc<dyn CompletionBackend>, ProviderError> {
    Ok(match kind {
        ProviderKind::OpenAI => Arc::new(OpenAICompatibleClient::new(
            "openai", model, api_key, endpoint,
        )?),
        ProviderKind::OpenRouter => Arc::new(OpenAICompatibleClient::new(
            "openrouter",
            model,
            api_key,
            endpoint,
        )?),
        ProviderKind::Gemini => Arc::new(GeminiClient::new(model, api_key, endpoint)?),
        ProviderKind::Mock => Arc::new(MockBackend::new()),
    })
}

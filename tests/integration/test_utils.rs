//! Shared test utilities for integration tests
//!
//! A scripted backend for driving the orchestrator without a network, and
//! environment isolation for configuration tests.

use async_trait::async_trait;
use nomora::provider::{CompletionBackend, CompletionOptions, ProviderKind, ProviderRegistry};
use nomora::types::{ChatMessage, UserProfile};
use nomora::{GenerationOrchestrator, ProviderError};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// What the backend received on its most recent call
#[derive(Debug, Clone, Default)]
pub struct RecordedCall {
    pub system: String,
    pub user: Option<String>,
    pub history: Vec<ChatMessage>,
    pub options: Option<CompletionOptions>,
}

/// Backend returning one fixed reply for every call.
pub struct ScriptedBackend {
    reply: Result<String, ProviderError>,
    calls: AtomicUsize,
    last: Mutex<RecordedCall>,
}

impl ScriptedBackend {
    pub fn replying(reply: impl Into<String>) -> Arc<Self> {
        Self::with_result(Ok(reply.into()))
    }

    pub fn failing(error: ProviderError) -> Arc<Self> {
        Self::with_result(Err(error))
    }

    fn with_result(reply: Result<String, ProviderError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last: Mutex::new(RecordedCall::default()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> RecordedCall {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        options: &CompletionOptions,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = RecordedCall {
            system: system.to_string(),
            user: Some(user.to_string()),
            history: Vec::new(),
            options: Some(*options),
        };
        self.reply.clone()
    }

    async fn complete_chat(
        &self,
        system: &str,
        history: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = RecordedCall {
            system: system.to_string(),
            user: None,
            history: history.to_vec(),
            options: Some(*options),
        };
        self.reply.clone()
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-1"
    }
}

pub fn profile(country: &str) -> UserProfile {
    UserProfile {
        name: "Sari".to_string(),
        age: 23,
        origin_city: "Surabaya".to_string(),
        country: country.to_string(),
    }
}

/// Orchestrator whose active backend is the given handle, registered as OpenAI.
pub fn orchestrator_with(backend: Arc<ScriptedBackend>) -> GenerationOrchestrator {
    GenerationOrchestrator::new(Arc::new(ProviderRegistry::with_backend(
        ProviderKind::OpenAI,
        backend,
    )))
}

pub fn mock_orchestrator() -> GenerationOrchestrator {
    GenerationOrchestrator::new(Arc::new(ProviderRegistry::mock()))
}

/// Global mutex to serialize environment access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Variables read by the configuration loader
const CONFIG_VARS: &[&str] = &[
    "HOME",
    "XDG_CONFIG_HOME",
    "NOMORA_ENV",
    "NOMORA__PROVIDER__KIND",
    "NOMORA__PROVIDER__OPENAI__API_KEY",
    "NOMORA__LOGGING__LEVEL",
    "AI_PROVIDER",
    "OPENAI_API_KEY",
    "GEMINI_API_KEY",
    "OPENROUTER_API_KEY",
];

/// Run `f` with the configuration variables cleared and XDG_CONFIG_HOME
/// pointed at `config_home`. The original environment is restored afterwards.
pub fn with_isolated_env<F, R>(config_home: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let saved: Vec<(&str, Option<String>)> = CONFIG_VARS
        .iter()
        .map(|var| (*var, std::env::var(var).ok()))
        .collect();

    for var in CONFIG_VARS {
        std::env::remove_var(var);
    }
    std::env::set_var("XDG_CONFIG_HOME", config_home);

    let result = f();

    for (var, value) in saved {
        match value {
            Some(v) => std::env::set_var(var, v),
            None => std::env::remove_var(var),
        }
    }

    result
}

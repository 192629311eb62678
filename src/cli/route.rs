//! CLI route: single route table and run context. Dispatches to the orchestrator and output.

use crate::cli::help::command_name;
use crate::cli::output::{format_providers, to_pretty_json};
use crate::cli::parse::{Commands, ProfileArgs};
use crate::config::{ConfigLoader, NomoraConfig};
use crate::error::GenerationError;
use crate::orchestrator::GenerationOrchestrator;
use crate::provider::{ProviderKind, ProviderRegistry};
use crate::types::{ChatMessage, ChatRequest, TripRequest, UserProfile};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded config and the orchestrator built from it.
pub struct RunContext {
    orchestrator: GenerationOrchestrator,
}

impl RunContext {
    /// Load configuration, apply the provider override and build the registry.
    ///
    /// Any configuration problem, including a selected backend without its
    /// credential, is returned as `ConfigError`.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        provider_override: Option<ProviderKind>,
    ) -> Result<Self, GenerationError> {
        let mut config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };

        if let Some(kind) = provider_override {
            debug!(provider = %kind, "Provider overridden from command line");
            config.provider.kind = kind;
        }

        Self::from_config(&config)
    }

    pub fn from_config(config: &NomoraConfig) -> Result<Self, GenerationError> {
        config.ensure_valid()?;
        let registry = ProviderRegistry::from_settings(&config.provider)?;
        Ok(Self::with_registry(Arc::new(registry)))
    }

    pub fn with_registry(registry: Arc<ProviderRegistry>) -> Self {
        Self {
            orchestrator: GenerationOrchestrator::new(registry),
        }
    }

    pub fn orchestrator(&self) -> &GenerationOrchestrator {
        &self.orchestrator
    }

    /// Run one command; the returned string is printed on stdout.
    pub async fn execute(&self, command: &Commands) -> Result<String, GenerationError> {
        let started = Instant::now();
        let result = self.dispatch(command).await;
        info!(
            command = command_name(command),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    async fn dispatch(&self, command: &Commands) -> Result<String, GenerationError> {
        match command {
            Commands::Catchphrase {
                profile,
                feeling,
                budget,
            } => {
                let validation = self
                    .orchestrator
                    .generate_catchphrase(&to_profile(profile), feeling, *budget)
                    .await;
                to_pretty_json(&validation)
            }
            Commands::Plan {
                profile,
                days,
                budget,
                feeling,
            } => {
                let request = TripRequest {
                    days: *days,
                    budget: *budget,
                    feeling: feeling.clone(),
                };
                let profile = to_profile(profile);
                let (options, validation) = tokio::join!(
                    self.orchestrator.generate_plan_options(&profile, &request),
                    self.orchestrator
                        .generate_catchphrase(&profile, feeling, Some(*budget)),
                );
                to_pretty_json(&serde_json::json!({
                    "options": options?,
                    "feelingValidation": validation,
                }))
            }
            Commands::Chat {
                profile,
                message,
                history,
                chosen_plan,
            } => {
                let history = match history {
                    Some(path) => load_history(path)?,
                    None => Vec::new(),
                };
                let request = ChatRequest {
                    history,
                    message: Some(message.clone()),
                    chosen_plan_title: chosen_plan.clone(),
                };
                let reply = self
                    .orchestrator
                    .generate_chat_reply(&to_profile(profile), &request)
                    .await?;
                to_pretty_json(&serde_json::json!({ "reply": reply }))
            }
            Commands::Providers => format_providers(self.orchestrator.registry()),
        }
    }
}

fn to_profile(args: &ProfileArgs) -> UserProfile {
    UserProfile {
        name: args.name.clone(),
        age: args.age,
        origin_city: args.city.clone(),
        country: args.country.clone(),
    }
}

/// Read prior chat messages from a JSON array file.
pub(crate) fn load_history(path: &Path) -> Result<Vec<ChatMessage>, GenerationError> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        GenerationError::config(format!(
            "Failed to read chat history {}: {}",
            path.display(),
            e
        ))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        GenerationError::config(format!(
            "Invalid chat history {}: {}",
            path.display(),
            e
        ))
    })
}

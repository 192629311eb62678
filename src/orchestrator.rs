//! Generation orchestrator: the single entry point for the three tasks.
//!
//! Every call follows the same pipeline: mock short-circuit, or prompt →
//! backend → parser, with failures routed through [`FallbackPolicy`]. At most
//! one backend call is made per invocation; nothing is retried or cached.

use crate::error::GenerationError;
use crate::fallback::{self, FallbackPolicy, Recovery};
use crate::localization;
use crate::prompt::{PromptBody, PromptBuilder};
use crate::provider::mock::{plan_fixture, MOCK_CHAT_REPLY};
use crate::provider::{CompletionOptions, ProviderKind, ProviderRegistry};
use crate::response;
use crate::types::{
    ChatRequest, FeelingValidation, GenerationOutput, GenerationTask, PlanOption, TripRequest,
    UserProfile,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

pub struct GenerationOrchestrator {
    registry: Arc<ProviderRegistry>,
    fallback: FallbackPolicy,
}

impl GenerationOrchestrator {
    pub fn new(registry: Arc<ProviderRegistry>) -> Self {
        let fallback = FallbackPolicy::new(registry.active_kind());
        Self { registry, fallback }
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn provider(&self) -> ProviderKind {
        self.registry.active_kind()
    }

    /// Run one task through the pipeline.
    ///
    /// Catchphrase tasks never return `Err`.
    pub async fn generate(
        &self,
        task: &GenerationTask,
        profile: &UserProfile,
    ) -> Result<GenerationOutput, GenerationError> {
        let provider = self.provider();
        let started = Instant::now();
        info!(task = task.name(), provider = %provider, "Generation started");

        let result = if self.registry.is_mock() {
            Ok(mock_output(task, profile))
        } else {
            self.run_backend(task, profile).await
        };

        match result {
            Ok(output) => {
                info!(
                    task = task.name(),
                    provider = %provider,
                    duration_ms = started.elapsed().as_millis() as u64,
                    "Generation completed"
                );
                Ok(output)
            }
            Err(err) => match self.fallback.on_failure(task, profile, err) {
                Recovery::Recovered(output) => Ok(output),
                Recovery::Propagate(err) => {
                    error!(
                        task = task.name(),
                        provider = %provider,
                        kind = %err.kind,
                        duration_ms = started.elapsed().as_millis() as u64,
                        error = %err.message,
                        "Generation failed"
                    );
                    Err(err)
                }
            },
        }
    }

    pub async fn generate_catchphrase(
        &self,
        profile: &UserProfile,
        feeling: &str,
        budget: Option<i64>,
    ) -> FeelingValidation {
        let task = GenerationTask::Catchphrase {
            feeling: feeling.to_string(),
            budget,
        };
        match self.generate(&task, profile).await {
            Ok(GenerationOutput::Catchphrase(validation)) => validation,
            // Unreachable in practice: catchphrase failures are recovered by the policy.
            _ => fallback::synthesize_catchphrase(profile, feeling, budget),
        }
    }

    pub async fn generate_plan_options(
        &self,
        profile: &UserProfile,
        request: &TripRequest,
    ) -> Result<Vec<PlanOption>, GenerationError> {
        let task = GenerationTask::PlanSuggestion(request.clone());
        match self.generate(&task, profile).await? {
            GenerationOutput::Plans(options) => Ok(options),
            other => Err(unexpected_output(&task, &other)),
        }
    }

    pub async fn generate_chat_reply(
        &self,
        profile: &UserProfile,
        request: &ChatRequest,
    ) -> Result<String, GenerationError> {
        let task = GenerationTask::ChatReply(request.clone());
        match self.generate(&task, profile).await? {
            GenerationOutput::Reply(reply) => Ok(reply),
            other => Err(unexpected_output(&task, &other)),
        }
    }

    async fn run_backend(
        &self,
        task: &GenerationTask,
        profile: &UserProfile,
    ) -> Result<GenerationOutput, GenerationError> {
        let backend = self.registry.active_backend()?;
        let locale = localization::resolve(&profile.country);
        let prompt = PromptBuilder::build(task, profile, locale);
        let options = completion_options(task);

        debug!(
            task = task.name(),
            provider = backend.provider_name(),
            model = backend.model_name(),
            locale = ?locale.locale,
            "Invoking backend"
        );

        let raw = match &prompt.body {
            PromptBody::Single(user) => backend.complete(&prompt.system, user, &options).await?,
            PromptBody::Conversation(history) => {
                backend
                    .complete_chat(&prompt.system, history, &options)
                    .await?
            }
        };

        match task {
            GenerationTask::Catchphrase { .. } => {
                response::parse_feeling_validation(&raw).map(GenerationOutput::Catchphrase)
            }
            GenerationTask::PlanSuggestion(_) => {
                response::parse_plan_options(&raw).map(GenerationOutput::Plans)
            }
            GenerationTask::ChatReply(_) => Ok(GenerationOutput::Reply(raw)),
        }
    }
}

fn completion_options(task: &GenerationTask) -> CompletionOptions {
    match task {
        GenerationTask::Catchphrase { .. } => CompletionOptions::CATCHPHRASE,
        GenerationTask::PlanSuggestion(_) => CompletionOptions::PLAN_SUGGESTION,
        GenerationTask::ChatReply(_) => CompletionOptions::CHAT_REPLY,
    }
}

fn mock_output(task: &GenerationTask, profile: &UserProfile) -> GenerationOutput {
    match task {
        GenerationTask::Catchphrase { feeling, budget } => GenerationOutput::Catchphrase(
            fallback::synthesize_catchphrase(profile, feeling, *budget),
        ),
        GenerationTask::PlanSuggestion(_) => GenerationOutput::Plans(plan_fixture()),
        GenerationTask::ChatReply(_) => GenerationOutput::Reply(MOCK_CHAT_REPLY.to_string()),
    }
}

fn unexpected_output(task: &GenerationTask, output: &GenerationOutput) -> GenerationError {
    GenerationError::unknown(format!(
        "Pipeline produced {:?} for task '{}'",
        output,
        task.name()
    ))
}

//! Failure handling per task.
//!
//! Catchphrase failures are always recovered with a locally synthesized
//! phrase. Plan and chat failures are never recovered; they are classified
//! and handed back to the caller as a [`GenerationError`].

use crate::budget;
use crate::error::{ErrorKind, GenerationError};
use crate::localization::{self, FeelingCategory};
use crate::provider::ProviderKind;
use crate::types::{FeelingValidation, GenerationOutput, GenerationTask, Mood, UserProfile};
use tracing::warn;

/// Outcome of applying the fallback policy to a failure
#[derive(Debug, Clone, PartialEq)]
pub enum Recovery {
    Recovered(GenerationOutput),
    Propagate(GenerationError),
}

/// Keyword table for failures that were not tagged at the adapter boundary.
/// Matched case-insensitively, in order.
const KEYWORD_CLASSES: &[(&[&str], ErrorKind)] = &[
    (&["api key"], ErrorKind::ConfigError),
    (&["quota", "billing"], ErrorKind::QuotaExceeded),
    (&["rate limit"], ErrorKind::RateLimited),
    (&["timeout"], ErrorKind::Timeout),
];

/// Classify a failure for propagation.
///
/// Kinds already assigned structurally by an adapter are kept as-is. Shape
/// errors become `Unknown` without looking at their message, which may echo
/// backend output. Only untagged failures are matched against the keyword table.
pub fn classify(error: &GenerationError) -> ErrorKind {
    match error.kind {
        ErrorKind::ConfigError
        | ErrorKind::ProviderUnavailable
        | ErrorKind::QuotaExceeded
        | ErrorKind::RateLimited
        | ErrorKind::Timeout => error.kind,
        ErrorKind::InvalidResponseShape => ErrorKind::Unknown,
        ErrorKind::Unknown => classify_detail(&error.message),
    }
}

/// Keyword classification of a free-text failure detail.
pub fn classify_detail(detail: &str) -> ErrorKind {
    let lower = detail.to_lowercase();
    KEYWORD_CLASSES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, kind)| *kind)
        .unwrap_or(ErrorKind::Unknown)
}

/// Build the catchphrase locally from the user's locale lexicon.
///
/// Empathy phrase for the detected feeling, then the budget-tier phrase when
/// a budget is known, then a sparkle. Mood is always `positive`.
pub fn synthesize_catchphrase(
    profile: &UserProfile,
    feeling: &str,
    budget: Option<i64>,
) -> FeelingValidation {
    let locale = localization::resolve(&profile.country);
    let empathy = locale.empathy_phrase(FeelingCategory::detect(feeling), feeling);

    let mut parts = vec![empathy];
    if let Some(amount) = budget {
        parts.push(locale.budget_phrase(budget::classify(amount)).to_string());
    }
    parts.push("✨".to_string());

    FeelingValidation {
        original_feeling: feeling.to_string(),
        catchphrase: parts.join(" "),
        mood: Mood::Positive,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FallbackPolicy {
    provider: ProviderKind,
}

impl FallbackPolicy {
    pub fn new(provider: ProviderKind) -> Self {
        Self { provider }
    }

    pub fn on_failure(
        &self,
        task: &GenerationTask,
        profile: &UserProfile,
        error: GenerationError,
    ) -> Recovery {
        match task {
            GenerationTask::Catchphrase { feeling, budget } => {
                warn!(
                    provider = %self.provider,
                    error = %error,
                    "Catchphrase generation failed; using local fallback"
                );
                Recovery::Recovered(GenerationOutput::Catchphrase(synthesize_catchphrase(
                    profile, feeling, *budget,
                )))
            }
            GenerationTask::PlanSuggestion(_) | GenerationTask::ChatReply(_) => {
                let kind = classify(&error);
                Recovery::Propagate(GenerationError::new(
                    kind,
                    format!(
                        "{}: failed to generate {}: {}",
                        self.provider,
                        describe(task),
                        error.message
                    ),
                ))
            }
        }
    }
}

fn describe(task: &GenerationTask) -> &'static str {
    match task {
        GenerationTask::Catchphrase { .. } => "feeling catchphrase",
        GenerationTask::PlanSuggestion(_) => "plan suggestions",
        GenerationTask::ChatReply(_) => "chat response",
    }
}

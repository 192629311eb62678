//! Core data types shared by the generation pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Profile of the user a generation is made for. Read-only to the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub origin_city: String,
    /// Country code, e.g. `ID`, `ZH`, `EN`
    pub country: String,
}

/// Chat message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

/// Chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// Trip parameters for a plan suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub days: u32,
    /// Budget in whole currency units (IDR)
    pub budget: i64,
    pub feeling: String,
}

/// Conversation state for a chat reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Prior messages, oldest first
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    /// New user turn, appended after the history window
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub chosen_plan_title: Option<String>,
}

/// One generation intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "snake_case")]
pub enum GenerationTask {
    Catchphrase {
        feeling: String,
        budget: Option<i64>,
    },
    PlanSuggestion(TripRequest),
    ChatReply(ChatRequest),
}

impl GenerationTask {
    pub fn name(&self) -> &'static str {
        match self {
            GenerationTask::Catchphrase { .. } => "catchphrase",
            GenerationTask::PlanSuggestion(_) => "plan_suggestion",
            GenerationTask::ChatReply(_) => "chat_reply",
        }
    }
}

/// A single suggested travel plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanOption {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub estimated_cost: i64,
    pub highlights: Vec<String>,
    pub suitability_score: f64,
}

/// Mood attached to a validated feeling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Positive,
    Neutral,
    Adventurous,
    Relaxed,
    Excited,
    Contemplative,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mood::Positive => "positive",
            Mood::Neutral => "neutral",
            Mood::Adventurous => "adventurous",
            Mood::Relaxed => "relaxed",
            Mood::Excited => "excited",
            Mood::Contemplative => "contemplative",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeelingValidation {
    pub original_feeling: String,
    pub catchphrase: String,
    pub mood: Mood,
}

/// Result of one pass through the generation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerationOutput {
    Catchphrase(FeelingValidation),
    Plans(Vec<PlanOption>),
    Reply(String),
}

//! Prompt construction
//!
//! Turns a task, a user profile and a resolved locale into the system
//! instruction and user payload sent to a backend. Pure: no I/O, and
//! identical inputs always yield identical prompts.

use crate::budget::{self, BudgetTier};
use crate::localization::LocaleEntry;
use crate::types::{ChatMessage, ChatRequest, GenerationTask, TripRequest, UserProfile};

/// Number of prior chat messages forwarded to the backend.
pub const CHAT_HISTORY_WINDOW: usize = 10;

pub const SYSTEM_PROMPT: &str = "You are Nomora, a Gen Z travel bestie who totally gets Indonesia vibes!
Your energy: super empathetic, authentic, and genuinely excited about travel. You speak like a supportive friend who validates feelings while being practical about Indonesian travel (IDR budgets, local transport, hidden gems).
Tone: Use Gen Z language naturally - \"lowkey\", \"no cap\", \"it's giving\", \"slaps different\", \"main character energy\", etc.
Always match the user's emotional energy and make them feel seen and understood.";

/// User-side payload of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptBody {
    /// Single-turn instruction
    Single(String),
    /// Multi-turn history, oldest first
    Conversation(Vec<ChatMessage>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub body: PromptBody,
}

pub struct PromptBuilder;

impl PromptBuilder {
    pub fn build(task: &GenerationTask, profile: &UserProfile, locale: &LocaleEntry) -> Prompt {
        match task {
            GenerationTask::Catchphrase { feeling, budget } => Prompt {
                system: SYSTEM_PROMPT.to_string(),
                body: PromptBody::Single(catchphrase_instruction(profile, locale, feeling, *budget)),
            },
            GenerationTask::PlanSuggestion(request) => Prompt {
                system: SYSTEM_PROMPT.to_string(),
                body: PromptBody::Single(plan_instruction(profile, locale, request)),
            },
            GenerationTask::ChatReply(request) => Prompt {
                system: chat_system_instruction(profile, locale, request.chosen_plan_title.as_deref()),
                body: PromptBody::Conversation(chat_window(request)),
            },
        }
    }
}

fn profile_line(profile: &UserProfile) -> String {
    format!(
        "User: {} ({}yo) from {}, Country: {}",
        profile.name, profile.age, profile.origin_city, profile.country
    )
}

fn locale_lines(locale: &LocaleEntry) -> String {
    format!(
        "LANGUAGE REQUIREMENT: {}\nCULTURAL CONTEXT: {}",
        locale.language_directive, locale.cultural_directive
    )
}

fn catchphrase_instruction(
    profile: &UserProfile,
    locale: &LocaleEntry,
    feeling: &str,
    budget: Option<i64>,
) -> String {
    let budget_line = match budget {
        Some(amount) => {
            let tier = budget::classify(amount);
            format!("Budget: {} IDR ({} tier). {}", amount, tier, tier.guidance())
        }
        None => "They're working with some funds for their travel dreams".to_string(),
    };
    let schema = serde_json::json!({
        "originalFeeling": feeling,
        "catchphrase": "your empathetic gen z bestie catchphrase here IN THE APPROPRIATE LANGUAGE",
        "mood": "mood_category",
    });

    format!(
        "Bestie energy check!

{profile}
Current feeling: \"{feeling}\"
{budget_line}

{locale}

Your mission: Create a Gen Z catchphrase (20-35 words) that:
- Totally validates their feeling (no toxic positivity!)
- Acknowledges their budget reality (without being weird about it)
- If they seem upset/sad, give gentle encouragement while keeping it real
- If they're being unrealistic with their budget, throw in a light, friendly joke but stay supportive
- If they have a huge budget, hype them up about the luxury possibilities
- Uses Gen Z language naturally appropriate for their country/language

Mood categories: positive, neutral, adventurous, relaxed, excited, contemplative

Output ONLY this JSON object and nothing else (with the catchphrase in the appropriate language):
{schema}",
        profile = profile_line(profile),
        feeling = feeling,
        budget_line = budget_line,
        locale = locale_lines(locale),
        schema = pretty(&schema),
    )
}

fn plan_instruction(profile: &UserProfile, locale: &LocaleEntry, request: &TripRequest) -> String {
    let tier = budget::classify(request.budget);
    let tier_table: Vec<String> = BudgetTier::ALL
        .iter()
        .rev()
        .map(|t| format!("- {}", t.guidance()))
        .collect();
    let schema = serde_json::json!({
        "options": [{
            "id": "string",
            "title": "string (in appropriate language)",
            "summary": "string (in appropriate language)",
            "estimatedCost": 0,
            "highlights": ["string (in appropriate language)"],
            "suitabilityScore": 0.0,
        }]
    });

    format!(
        "Bestie check-in!
{profile}
Current vibe: \"{feeling}\"
Trip deets: {days} days, {budget} IDR budget

{locale}

Mission: Create 4 travel plans that totally GET their feeling! Each plan should feel like it was made just for their current mood.

CRITICAL BUDGET RULES:
NEVER exceed {budget} IDR - this is their absolute limit!

BUDGET CATEGORIES:
{tier_table}

THEIR BUDGET TIER: {tier}. {guidance}
- If transportation costs eat the budget, suggest local/nearby destinations instead
- Be realistic but aspirational within their means

COST CALCULATION: include transportation from {city} to the destination, local transport, accommodation, food, activities and miscellaneous costs, all in IDR.

Requirements for each option (RESPOND IN THE APPROPRIATE LANGUAGE):
- id (opt_1 to opt_4)
- title (Gen Z friendly, feeling-focused, budget-aware)
- summary (1-2 sentences that validate their vibe AND acknowledge their budget reality)
- estimatedCost (integer, MUST be <= {budget} IDR, include ALL components)
- highlights (4-7 activities that match their emotional energy AND budget)
- suitabilityScore (0.0-1.0 based on feeling match AND budget fit)

Output ONLY this JSON object and nothing else (with all text content in the appropriate language):
{schema}",
        profile = profile_line(profile),
        feeling = request.feeling,
        days = request.days,
        budget = request.budget,
        locale = locale_lines(locale),
        tier_table = tier_table.join("\n"),
        tier = tier,
        guidance = tier.guidance(),
        city = profile.origin_city,
        schema = pretty(&schema),
    )
}

fn chat_system_instruction(
    profile: &UserProfile,
    locale: &LocaleEntry,
    chosen_plan_title: Option<&str>,
) -> String {
    let chosen = chosen_plan_title
        .map(|title| format!("\nTheir chosen adventure: {}", title))
        .unwrap_or_default();

    format!(
        "{persona}

Bestie vibes only!
{profile}{chosen}

{locale}

Your energy:
- Talk like their supportive Gen Z bestie who's genuinely excited about travel
- Use Gen Z language naturally appropriate for their country/language
- Be empathetic and validate their feelings
- Keep it under 180 words unless they ask for more deets
- Give practical advice but make it feel like friendly suggestions",
        persona = SYSTEM_PROMPT,
        profile = profile_line(profile),
        chosen = chosen,
        locale = locale_lines(locale),
    )
}

/// Most recent messages of the history, oldest first, then the new user turn.
pub fn chat_window(request: &ChatRequest) -> Vec<ChatMessage> {
    let start = request.history.len().saturating_sub(CHAT_HISTORY_WINDOW);
    let mut window = request.history[start..].to_vec();
    if let Some(message) = &request.message {
        window.push(ChatMessage::user(message.clone()));
    }
    window
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

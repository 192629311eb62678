//! Deterministic offline backend.
//!
//! Never touches the network. The plan fixture is fixed and does not adapt
//! to the requested budget, days or feeling.

use super::{CompletionBackend, CompletionOptions};
use crate::error::ProviderError;
use crate::types::{ChatMessage, PlanOption};
use async_trait::async_trait;

pub const MOCK_CHAT_REPLY: &str = "Heyy bestie! I'm Nomora, your Gen Z travel companion who's absolutely here for all your Indonesia adventure vibes! What kind of energy are you bringing to your next trip? Let's make some main character memories! ✨";

fn option(
    id: &str,
    title: &str,
    summary: &str,
    estimated_cost: i64,
    highlights: &[&str],
    suitability_score: f64,
) -> PlanOption {
    PlanOption {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        estimated_cost,
        highlights: highlights.iter().map(|h| h.to_string()).collect(),
        suitability_score,
    }
}

/// Fixed set of four plan options returned by the mock backend.
pub fn plan_fixture() -> Vec<PlanOption> {
    vec![
        option(
            "opt_1",
            "Bali Luxury Queen Era (Ultimate Flex)",
            "When your budget is absolutely unhinged and you deserve that main character luxury experience - this trip is giving millionaire vibes.",
            18_500_000,
            &[
                "Private villa with infinity pool that's literally iconic ✨",
                "Helicopter tour over rice terraces - no cap the views are unreal",
                "Michelin-level dining experiences that'll ruin other food for you",
                "Private yacht day trip to Nusa Penida - it's giving yacht club energy",
                "Luxury spa treatments that'll have you glowing different",
                "VIP Uluwatu temple sunset with private guide - main character moment",
            ],
            0.95,
        ),
        option(
            "opt_2",
            "Mid-Range Bali Adventure (Sweet Spot Vibes)",
            "Perfect balance of comfort and adventure - you get that Bali experience without breaking the bank but still feeling bougie.",
            6_200_000,
            &[
                "Nice hotel with pool in Ubud - it's giving resort vibes ✨",
                "White water rafting that hits different",
                "Traditional cooking class where you actually learn something",
                "Temple hopping with a local guide who knows the tea",
                "Monkey Forest selfies (they're lowkey photogenic)",
                "Sunset dinner at a rooftop restaurant - Instagram ready",
            ],
            0.88,
        ),
        option(
            "opt_3",
            "Local Jakarta Vibes (Budget Queen Era)",
            "This trip keeps your wallet happy while giving you that main character energy with free activities and budget-friendly spots around your city.",
            1_500_000,
            &[
                "Monas area free walking tour - it's giving historical main character ✨",
                "Ancol beach sunset sessions that hit different (free entry on certain days)",
                "Street food hunting in Sabang - the flavors here slap, no cap",
                "Taman Mini exploration - lowkey educational but make it aesthetic",
                "Local warung hopping where your money goes further",
                "Free outdoor workout sessions at GBK - fitness era activated",
            ],
            0.92,
        ),
        option(
            "opt_4",
            "Staycation Self-Care Era (Home Base Queen)",
            "Sometimes the best trip is staying put and rediscovering your own city - budget-friendly and surprisingly refreshing.",
            800_000,
            &[
                "Local neighborhood exploration - tourist in your own city vibes ✨",
                "Free museum days - culture but make it budget-friendly",
                "Home spa sessions with DIY treatments - self-care on a budget",
                "Local park picnic setups - nature therapy without travel costs",
                "Free fitness classes in public spaces - glow-up era activated",
                "Cooking challenge with local ingredients - chef skills unlocked",
            ],
            0.90,
        ),
    ]
}

/// Mock backend handle.
///
/// `complete` answers with the plan fixture serialized as the JSON object the
/// plan prompt asks for; `complete_chat` answers with the fixed greeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockBackend;

impl MockBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(
        &self,
        _system: &str,
        _user: &str,
        _options: &CompletionOptions,
    ) -> Result<String, ProviderError> {
        serde_json::to_string(&serde_json::json!({ "options": plan_fixture() }))
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }

    async fn complete_chat(
        &self,
        _system: &str,
        _history: &[ChatMessage],
        _options: &CompletionOptions,
    ) -> Result<String, ProviderError> {
        Ok(MOCK_CHAT_REPLY.to_string())
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

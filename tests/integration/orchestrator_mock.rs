//! Integration tests for the mock backend path through the orchestrator

use crate::integration::test_utils::{mock_orchestrator, profile};
use futures::future::join_all;
use nomora::budget::{self, BudgetTier};
use nomora::localization;
use nomora::provider::mock::{plan_fixture, MOCK_CHAT_REPLY};
use nomora::types::{ChatMessage, ChatRequest, GenerationOutput, GenerationTask, Mood, TripRequest};

#[tokio::test]
async fn test_stressed_ultra_low_indonesian_catchphrase() {
    let orch = mock_orchestrator();
    let validation = orch
        .generate_catchphrase(&profile("ID"), "stressed", Some(500_000))
        .await;

    assert_eq!(budget::classify(500_000), BudgetTier::UltraLow);

    let id = localization::resolve("ID");
    assert_eq!(validation.original_feeling, "stressed");
    assert_eq!(validation.mood, Mood::Positive);
    assert_eq!(
        validation.catchphrase,
        format!(
            "{} {} ✨",
            id.feelings.stressed, id.budgets.ultra_low
        )
    );
}

#[tokio::test]
async fn test_catchphrase_with_empty_feeling_and_no_budget() {
    let validation = mock_orchestrator()
        .generate_catchphrase(&profile("ZZ"), "", None)
        .await;
    assert_eq!(validation.original_feeling, "");
    assert_eq!(validation.mood, Mood::Positive);
    assert!(!validation.catchphrase.is_empty());
}

#[tokio::test]
async fn test_mock_plans_ignore_requested_budget() {
    let orch = mock_orchestrator();
    for budget in [0, 500_000, 3_000_000, 50_000_000] {
        let request = TripRequest {
            days: 2,
            budget,
            feeling: "curious".to_string(),
        };
        let options = orch
            .generate_plan_options(&profile("ID"), &request)
            .await
            .unwrap();

        assert_eq!(options.len(), 4);
        assert!(options
            .iter()
            .all(|o| (0.0..=1.0).contains(&o.suitability_score)));
        assert_eq!(options, plan_fixture());
    }
}

#[tokio::test]
async fn test_mock_chat_returns_greeting() {
    let request = ChatRequest {
        history: vec![ChatMessage::user("halo")],
        message: Some("mau ke Bali".to_string()),
        chosen_plan_title: Some("Bali Luxury Queen Era (Ultimate Flex)".to_string()),
    };
    let reply = mock_orchestrator()
        .generate_chat_reply(&profile("ID"), &request)
        .await
        .unwrap();
    assert_eq!(reply, MOCK_CHAT_REPLY);
}

#[tokio::test]
async fn test_generic_generate_matches_task_entry_points() {
    let orch = mock_orchestrator();
    let task = GenerationTask::PlanSuggestion(TripRequest {
        days: 5,
        budget: 10_000_000,
        feeling: "excited".to_string(),
    });
    match orch.generate(&task, &profile("EN")).await.unwrap() {
        GenerationOutput::Plans(options) => assert_eq!(options.len(), 4),
        other => panic!("unexpected output {:?}", other),
    }
}

#[tokio::test]
async fn test_concurrent_calls_share_one_registry() {
    let orch = mock_orchestrator();
    let feelings = ["sad", "happy", "tired", "meh", "overwhelmed", "amazing"];
    let p = profile("EN");

    let results = join_all(
        feelings
            .iter()
            .map(|feeling| orch.generate_catchphrase(&p, feeling, Some(9_000_000))),
    )
    .await;

    assert_eq!(results.len(), feelings.len());
    for (validation, feeling) in results.iter().zip(feelings.iter()) {
        assert_eq!(validation.original_feeling, *feeling);
        assert!(validation.catchphrase.contains(localization::resolve("EN").budgets.high));
    }
}

//! Integration tests for the HTTP adapters against a local mock server

use nomora::provider::{
    CompletionBackend, CompletionOptions, GeminiClient, OpenAICompatibleClient, ProviderKind,
    BackendSettings, ProviderRegistry, ProviderSettings,
};
use nomora::types::{ChatMessage, TripRequest, UserProfile};
use nomora::{ErrorKind, GenerationOrchestrator, ProviderError};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn openai_client(server: &MockServer) -> OpenAICompatibleClient {
    OpenAICompatibleClient::new(
        "openai",
        "gpt-4o-mini".to_string(),
        "sk-test".to_string(),
        server.uri(),
    )
    .unwrap()
}

fn gemini_client(server: &MockServer) -> GeminiClient {
    GeminiClient::new(
        "gemini-2.5-flash-lite".to_string(),
        "g-test".to_string(),
        server.uri(),
    )
    .unwrap()
}

fn completion(content: &str) -> serde_json::Value {
    json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })
}

async fn openai_error(status: u16, body: &str) -> ProviderError {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;

    openai_client(&server)
        .complete("system", "user", &CompletionOptions::CATCHPHRASE)
        .await
        .unwrap_err()
}

#[tokio::test]
async fn test_openai_complete_sends_options_and_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 2000,
            "messages": [
                { "role": "system", "content": "be nice" },
                { "role": "user", "content": "plan it" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("hello")))
        .expect(1)
        .mount(&server)
        .await;

    let reply = openai_client(&server)
        .complete("be nice", "plan it", &CompletionOptions::PLAN_SUGGESTION)
        .await
        .unwrap();
    assert_eq!(reply, "hello");
}

#[tokio::test]
async fn test_openai_status_mapping() {
    assert!(matches!(
        openai_error(401, "invalid api key").await,
        ProviderError::AuthFailed(_)
    ));
    assert!(matches!(
        openai_error(402, "pay up").await,
        ProviderError::QuotaExceeded(_)
    ));
    assert!(matches!(
        openai_error(429, "You exceeded your current quota").await,
        ProviderError::QuotaExceeded(_)
    ));
    assert!(matches!(
        openai_error(429, "Too many requests").await,
        ProviderError::RateLimited(_)
    ));
    assert!(matches!(
        openai_error(504, "gateway").await,
        ProviderError::Timeout(_)
    ));
    assert!(matches!(
        openai_error(500, "boom").await,
        ProviderError::RequestFailed(_)
    ));
}

#[tokio::test]
async fn test_openai_empty_content_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("   ")))
        .mount(&server)
        .await;

    let err = openai_client(&server)
        .complete("s", "u", &CompletionOptions::CHAT_REPLY)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::EmptyResponse(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_unavailable() {
    // Nothing listens on port 1
    let client = OpenAICompatibleClient::new(
        "openai",
        "m".to_string(),
        "k".to_string(),
        "http://127.0.0.1:1".to_string(),
    )
    .unwrap();
    let err = client
        .complete("s", "u", &CompletionOptions::CHAT_REPLY)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Unavailable(_)));
}

#[tokio::test]
async fn test_gemini_chat_maps_roles_and_concatenates_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash-lite:generateContent"))
        .and(header("x-goog-api-key", "g-test"))
        .and(body_partial_json(json!({
            "contents": [
                { "role": "user", "parts": [{ "text": "hi" }] },
                { "role": "model", "parts": [{ "text": "hey bestie" }] }
            ],
            "systemInstruction": { "parts": [{ "text": "persona" }] },
            "generationConfig": { "maxOutputTokens": 300 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "part one, " }, { "text": "part two" }] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let history = vec![ChatMessage::user("hi"), ChatMessage::assistant("hey bestie")];
    let reply = gemini_client(&server)
        .complete_chat("persona", &history, &CompletionOptions::CHAT_REPLY)
        .await
        .unwrap();
    assert_eq!(reply, "part one, part two");
}

#[tokio::test]
async fn test_gemini_status_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string("RESOURCE_EXHAUSTED: check quota"),
        )
        .mount(&server)
        .await;

    let err = gemini_client(&server)
        .complete("s", "u", &CompletionOptions::CATCHPHRASE)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::QuotaExceeded(_)));
}

#[tokio::test]
async fn test_gemini_without_candidates_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = gemini_client(&server)
        .complete("s", "u", &CompletionOptions::CATCHPHRASE)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::EmptyResponse(_)));
}

#[tokio::test]
async fn test_orchestrator_over_http_propagates_rate_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .expect(1)
        .mount(&server)
        .await;

    let settings = ProviderSettings {
        kind: ProviderKind::OpenRouter,
        openrouter: BackendSettings {
            api_key: Some("or-test".to_string()),
            model: None,
            endpoint: Some(server.uri()),
        },
        ..ProviderSettings::default()
    };
    let registry = ProviderRegistry::from_settings(&settings).unwrap();
    let orch = GenerationOrchestrator::new(Arc::new(registry));

    let profile = UserProfile {
        name: "Nia".to_string(),
        age: 20,
        origin_city: "Medan".to_string(),
        country: "ID".to_string(),
    };
    let request = TripRequest {
        days: 2,
        budget: 1_200_000,
        feeling: "bosen".to_string(),
    };
    let err = orch.generate_plan_options(&profile, &request).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::RateLimited);
    assert!(err.message.starts_with("openrouter:"));
}

//! Gemini `generateContent` client.

use super::{
    build_provider_http_client, error_from_response, map_http_error, CompletionBackend,
    CompletionOptions,
};
use crate::error::ProviderError;
use crate::types::{ChatMessage, MessageRole};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

// Gemini API request/response structures

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    system_instruction: GeminiSystemInstruction<'a>,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    role: &'static str,
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiSystemInstruction<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    error: Option<GeminiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetail {
    message: String,
}

/// Gemini uses `model` for assistant turns; every other role is sent as `user`.
fn gemini_role(role: MessageRole) -> &'static str {
    match role {
        MessageRole::Assistant => "model",
        MessageRole::User | MessageRole::System => "user",
    }
}

pub struct GeminiClient {
    client: Client,
    model: String,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(model: String, api_key: String, endpoint: String) -> Result<Self, ProviderError> {
        let client = build_provider_http_client()?;
        Ok(Self {
            client,
            model,
            api_key,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn build_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    async fn generate(
        &self,
        system: &str,
        contents: Vec<GeminiContent<'_>>,
        options: &CompletionOptions,
    ) -> Result<String, ProviderError> {
        let body = GeminiRequest {
            contents,
            system_instruction: GeminiSystemInstruction {
                parts: vec![GeminiPart { text: system }],
            },
            generation_config: GeminiGenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_tokens,
            },
        };

        let response = self
            .client
            .post(self.build_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let parsed: GeminiResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        if let Some(error) = parsed.error {
            return Err(ProviderError::RequestFailed(format!(
                "Gemini API error: {}",
                error.message
            )));
        }

        let text: String = parsed
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .map(|content| content.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse(
                "No content in Gemini response".to_string(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        options: &CompletionOptions,
    ) -> Result<String, ProviderError> {
        let contents = vec![GeminiContent {
            role: "user",
            parts: vec![GeminiPart { text: user }],
        }];
        self.generate(system, contents, options).await
    }

    async fn complete_chat(
        &self,
        system: &str,
        history: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<String, ProviderError> {
        let contents = history
            .iter()
            .map(|msg| GeminiContent {
                role: gemini_role(msg.role),
                parts: vec![GeminiPart { text: &msg.content }],
            })
            .collect();
        self.generate(system, contents, options).await
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

//! OpenAI-compatible chat completions client.
//!
//! Serves both OpenAI and OpenRouter, which differ only in base URL, model
//! naming and credential.

use super::{
    build_provider_http_client, error_from_response, map_http_error, CompletionBackend,
    CompletionOptions,
};
use crate::error::ProviderError;
use crate::types::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAIMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize)]
struct OpenAIMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

pub struct OpenAICompatibleClient {
    client: Client,
    provider_name: &'static str,
    model: String,
    api_key: String,
    base_url: String,
}

impl OpenAICompatibleClient {
    pub fn new(
        provider_name: &'static str,
        model: String,
        api_key: String,
        base_url: String,
    ) -> Result<Self, ProviderError> {
        let client = build_provider_http_client()?;
        Ok(Self {
            client,
            provider_name,
            model,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn send(
        &self,
        messages: Vec<OpenAIMessage<'_>>,
        options: &CompletionOptions,
    ) -> Result<String, ProviderError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: options.temperature,
            max_tokens: options.max_tokens,
            stream: false,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_http_error)?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                ProviderError::EmptyResponse(format!("No content from {}", self.provider_name))
            })
    }
}

#[async_trait]
impl CompletionBackend for OpenAICompatibleClient {
    async fn complete(
        &self,
        system: &str,
        user: &str,
        options: &CompletionOptions,
    ) -> Result<String, ProviderError> {
        let messages = vec![
            OpenAIMessage {
                role: "system",
                content: system,
            },
            OpenAIMessage {
                role: "user",
                content: user,
            },
        ];
        self.send(messages, options).await
    }

    async fn complete_chat(
        &self,
        system: &str,
        history: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<String, ProviderError> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(OpenAIMessage {
            role: "system",
            content: system,
        });
        messages.extend(history.iter().map(|msg| OpenAIMessage {
            role: msg.role.as_str(),
            content: &msg.content,
        }));
        self.send(messages, options).await
    }

    fn provider_name(&self) -> &str {
        self.provider_name
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

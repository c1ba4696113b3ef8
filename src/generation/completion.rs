use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{GenerationError, Generator, SYSTEM_INSTRUCTION};
use crate::config::CompletionConfig;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAI-style `{"error": {"message": ...}}` bodies.
#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Client for an OpenAI-compatible chat-completions endpoint.
pub struct ChatCompletionClient {
    client: reqwest::Client,
    url: String,
    model: String,
    api_key: Option<String>,
}

impl ChatCompletionClient {
    pub fn new(config: &CompletionConfig) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| format!("Failed to build completion client: {e}"))?;

        Ok(Self {
            client,
            url: config.url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Generator for ChatCompletionClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::from("Completion API key is not configured"))?;

        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::from(format!("Completion request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ErrorBody>(&text) {
                Ok(body) => format!(
                    "Request failed with status code {}: {}",
                    status.as_u16(),
                    body.error.message
                ),
                Err(_) => format!("Request failed with status code {}", status.as_u16()),
            };
            return Err(GenerationError::from(message));
        }

        let reply: ChatResponse = resp
            .json()
            .await
            .map_err(|e| GenerationError::from(format!("Invalid completion response: {e}")))?;

        let html = reply
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::from("Completion returned no choices"))?
            .message
            .content
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| GenerationError::from("Completion returned no content"))?;

        tracing::debug!(model = %self.model, bytes = html.len(), "Survey markup generated");
        Ok(html)
    }
}

//! OpenAI-compatible provider implementation
//!
//! The configured endpoint is the full chat-completions URL, so any
//! OpenAI-compatible gateway can be used.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::domain::{
    CompletionRequest, CompletionResponse, LlmError, LlmProvider, ProviderInfo, StopReason, Usage,
};

/// OpenAI-compatible provider
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    timeout_seconds: u64,
}

impl OpenAIProvider {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: build_client(120),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            timeout_seconds: 120,
        }
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.client = build_client(seconds);
        self.timeout_seconds = seconds;
        self
    }

    /// Convert to OpenAI request format
    fn to_openai_request(&self, request: &CompletionRequest) -> OpenAIRequest {
        let messages = request
            .messages
            .iter()
            .map(|msg| OpenAIMessage {
                role: msg.role.as_str().to_string(),
                content: Some(msg.content.clone()),
            })
            .collect();

        OpenAIRequest {
            model: request.model.clone().unwrap_or_else(|| self.model.clone()),
            messages,
        }
    }

    /// Convert from OpenAI response format
    fn parse_openai_response(&self, response: OpenAIResponse) -> Result<CompletionResponse, LlmError> {
        let Some(choice) = response.choices.into_iter().next() else {
            return Err(LlmError::InvalidResponse(
                "Response contained no choices".to_string(),
            ));
        };
        let Some(message) = choice.message else {
            return Err(LlmError::InvalidResponse(
                "First choice carried no message".to_string(),
            ));
        };

        let stop_reason = match choice.finish_reason.as_deref() {
            Some("stop") => StopReason::EndTurn,
            Some("length") => StopReason::MaxTokens,
            Some("content_filter") => StopReason::ContentFilter,
            _ => StopReason::Other,
        };

        let usage = response
            .usage
            .map(|u| Usage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: response.id.unwrap_or_default(),
            model: response.model.unwrap_or_else(|| self.model.clone()),
            content: message.content.unwrap_or_default(),
            stop_reason,
            usage,
        })
    }

    fn map_transport_error(&self, err: reqwest::Error) -> LlmError {
        if err.is_timeout() {
            LlmError::timeout(self.timeout_seconds)
        } else {
            err.into()
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn info(&self) -> ProviderInfo {
        ProviderInfo {
            id: "openai",
            name: "OpenAI compatible",
            version: "v1",
        }
    }

    fn default_model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let openai_request = self.to_openai_request(&request);

        debug!(model = %openai_request.model, "Sending request to OpenAI-compatible API");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&openai_request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            let text = response.text().await.unwrap_or_default();
            let message = error_message(&text);

            if status.as_u16() == 429 {
                return Err(LlmError::rate_limited(message, retry_after));
            } else if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(LlmError::auth(message));
            } else if status.is_server_error() {
                return Err(LlmError::ServiceUnavailable(message));
            }

            error!(status = %status, "OpenAI API error: {}", message);
            return Err(LlmError::InvalidResponse(format!(
                "API error {}: {}",
                status, message
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;
        let openai_response: OpenAIResponse = serde_json::from_str(&body)?;
        self.parse_openai_response(openai_response)
    }
}

fn build_client(timeout_seconds: u64) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .unwrap_or_else(|e| {
            error!(error = %e, "Failed to build HTTP client with custom timeout, using default client");
            Client::new()
        })
}

/// Prefer the `message` the API put in its error body over the raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .or_else(|| value.get("error").and_then(|e| e.get("message")))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

// OpenAI API types

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    id: Option<String>,
    model: Option<String>,
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
    usage: Option<OpenAIUsage>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: Option<OpenAIMessage>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

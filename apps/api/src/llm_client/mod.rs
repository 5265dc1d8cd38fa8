//! LLM Client: the single point of entry for all OpenRouter calls in Hookline.
//!
//! ARCHITECTURAL RULE: No other module may call the completion API directly.
//! Handlers depend on the `ChatCompletion` trait, never on `reqwest`.
//!
//! One request per call. There is no retry loop: a failure is surfaced to the
//! caller as-is and the end user decides whether to try again.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;

/// Hard ceiling on a single completion round-trip.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM request timed out after {}s", REQUEST_TIMEOUT.as_secs())]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl CompletionResponse {
    /// Text of the first choice, if it carries any non-blank content.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Builds the error for a non-success response. An unreadable or empty body
/// falls back to the status's canonical reason.
fn api_error(status: StatusCode, body: Option<String>) -> LlmError {
    let message = match body.filter(|b| !b.trim().is_empty()) {
        Some(body) => extract_error_message(body),
        None => status.canonical_reason().unwrap_or("Unknown error").to_string(),
    };
    LlmError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Pulls the human-readable message out of an OpenRouter error body,
/// falling back to the raw body.
fn extract_error_message(body: String) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Chat-completion seam. The production implementation is `LlmClient`;
/// tests inject a stub.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError>;
}

/// OpenRouter chat-completions client.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    site_url: Option<String>,
    app_title: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(REQUEST_TIMEOUT).build()?,
            api_key: config.openrouter_api_key.clone(),
            endpoint: format!(
                "{}/chat/completions",
                config.openrouter_base_url.trim_end_matches('/')
            ),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            site_url: config.site_url.clone(),
            app_title: config.app_title.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a single raw call, returning the full response object.
    pub async fn call(&self, messages: &[ChatMessage]) -> Result<CompletionResponse, LlmError> {
        let body = CompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let mut request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("X-Title", &self.app_title)
            .json(&body);
        if let Some(site_url) = &self.site_url {
            request = request.header("HTTP-Referer", site_url);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => Some(body),
                Err(e) => {
                    warn!("Failed to read LLM error body: {e}");
                    None
                }
            };
            return Err(api_error(status, body));
        }

        let parsed: CompletionResponse = response.json().await.map_err(map_transport_error)?;

        if let Some(usage) = &parsed.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(parsed)
    }
}

fn map_transport_error(e: reqwest::Error) -> LlmError {
    if e.is_timeout() {
        LlmError::Timeout
    } else {
        LlmError::Http(e)
    }
}

#[async_trait]
impl ChatCompletion for LlmClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let response = self.call(messages).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let messages = vec![ChatMessage::system("be brief"), ChatMessage::user("hello")];
        let body = CompletionRequest {
            model: "openai/gpt-4o-mini",
            messages: &messages,
            temperature: 0.7,
            max_tokens: 2000,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "openai/gpt-4o-mini");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "hello");
        assert_eq!(value["max_tokens"], 2000);
        assert!(value["temperature"].as_f64().is_some());
    }

    #[test]
    fn test_text_takes_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "first"}},
                {"message": {"role": "assistant", "content": "second"}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2}
        }"#;
        let response: CompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("first"));
    }

    #[test]
    fn test_text_is_none_for_blank_or_missing_content() {
        let blank: CompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": "   "}}]}"#).unwrap();
        assert_eq!(blank.text(), None);

        let null: CompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert_eq!(null.text(), None);

        let empty: CompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(empty.text(), None);

        let missing: CompletionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.text(), None);
    }

    #[test]
    fn test_extract_error_message_from_envelope() {
        let body = r#"{"error": {"message": "Invalid API key", "code": 401}}"#.to_string();
        assert_eq!(extract_error_message(body), "Invalid API key");
    }

    #[test]
    fn test_extract_error_message_falls_back_to_raw_body() {
        let body = "upstream exploded".to_string();
        assert_eq!(extract_error_message(body), "upstream exploded");
    }

    #[test]
    fn test_unreadable_error_body_uses_status_reason() {
        let err = api_error(StatusCode::TOO_MANY_REQUESTS, None);
        assert_eq!(err.to_string(), "API error (status 429): Too Many Requests");

        let err = api_error(StatusCode::BAD_GATEWAY, Some("  ".to_string()));
        assert_eq!(err.to_string(), "API error (status 502): Bad Gateway");

        let err = api_error(StatusCode::PAYMENT_REQUIRED, Some("no credits".to_string()));
        assert_eq!(err.to_string(), "API error (status 402): no credits");
    }

    #[test]
    fn test_error_messages_are_user_readable() {
        let err = LlmError::Api {
            status: 402,
            message: "Insufficient credits".to_string(),
        };
        assert_eq!(err.to_string(), "API error (status 402): Insufficient credits");
        assert_eq!(LlmError::Timeout.to_string(), "LLM request timed out after 120s");
    }
}

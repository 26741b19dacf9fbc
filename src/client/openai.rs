//! OpenAI-compatible chat completions client
//!
//! Sends the composed prompt as a single user message and returns the first
//! choice's content. Works with any endpoint speaking the
//! `/chat/completions` protocol.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::redact::redact_secrets;
use super::ExplanationClient;
use crate::config::LlmConfig;
use crate::error::RemoteError;

/// Blocking HTTP client for a chat completions endpoint
pub struct OpenAiClient {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OpenAiClient {
    /// Create a client with an explicit key
    pub fn new(
        base_url: &str,
        model: &str,
        api_key: &str,
        timeout_secs: u64,
    ) -> Result<Self, RemoteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| RemoteError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
            client,
            timeout_secs,
        })
    }

    /// Create a client from configuration, reading the key from the
    /// configured environment variable
    pub fn from_config(config: &LlmConfig) -> Result<Self, RemoteError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| RemoteError::MissingApiKey(config.api_key_env.clone()))?;

        Self::new(&config.base_url, &config.model, &api_key, config.timeout_secs)
    }

    /// The model name being used.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

/// Request body for /chat/completions
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Response body from /chat/completions
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Pull the text out of a parsed response
fn first_content(response: ChatResponse) -> Result<String, RemoteError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or(RemoteError::EmptyResponse)
}

impl ExplanationClient for OpenAiClient {
    fn generate(&self, prompt: &str) -> Result<String, RemoteError> {
        let url = self.endpoint();
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(model = %self.model, url = %url, prompt_len = prompt.len(), "requesting explanation");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    RemoteError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    RemoteError::Timeout(self.timeout_secs)
                } else {
                    RemoteError::HttpClient(redact_secrets(&e.to_string()))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body: redact_secrets(&body),
            });
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| RemoteError::ResponseParsing(e.to_string()))?;

        first_content(parsed)
    }
}

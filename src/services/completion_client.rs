use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::FetchError;

/// One prompt in, one completion's text out.
///
/// Implementations make a single round trip: no retry, no backoff.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, FetchError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Client for OpenAI-compatible `/chat/completions` endpoints, including
/// keyless public proxies.
pub struct ChatCompletionClient {
    http: reqwest::Client,
    api_base: String,
    api_key: Option<SecretString>,
    model: Option<String>,
}

impl ChatCompletionClient {
    pub fn new(api_base: &str, api_key: Option<&SecretString>, model: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.to_string(),
            api_key: api_key.cloned(),
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }

    fn request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        }
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String, FetchError> {
        let mut request = self.http.post(self.endpoint()).json(&self.request(prompt));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            log::error!("Chat completion request failed: {}", e);
            FetchError::Request(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        check_status(status, &body)?;

        let envelope: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| FetchError::Envelope(format!("{} | Response: {}", e, body)))?;
        completion_text(envelope)
    }
}

/// Non-2xx responses become a transport error carrying the body verbatim.
pub fn check_status(status: StatusCode, body: &str) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }

    log::error!("Model API request failed with status {}: {}", status, body);
    Err(FetchError::Status {
        status: status.as_u16(),
        body: body.to_string(),
    })
}

/// Pulls the first choice's message text out of a chat completion envelope.
pub fn completion_text(response: ChatResponse) -> Result<String, FetchError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| FetchError::Envelope("no completion text in choices[0].message".to_string()))
}

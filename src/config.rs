use std::env;
use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

/// Which completion API backs question generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LlmProvider {
    Gemini,
    /// Any OpenAI-compatible chat completions endpoint.
    Chat,
}

impl LlmProvider {
    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "gemini" => Some(LlmProvider::Gemini),
            "chat" | "openai" => Some(LlmProvider::Chat),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub allowed_origin: String,
    pub llm_provider: LlmProvider,
    pub gemini_api_key: SecretString,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub chat_api_base: String,
    pub chat_api_key: Option<SecretString>,
    pub chat_model: Option<String>,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            allowed_origin: env::var("ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            llm_provider: env::var("LLM_PROVIDER")
                .ok()
                .and_then(|p| LlmProvider::from_name(&p))
                .unwrap_or(LlmProvider::Gemini),
            gemini_api_key: SecretString::from(env::var("GEMINI_API_KEY").unwrap_or_default()),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            chat_api_base: env::var("CHAT_API_BASE")
                .unwrap_or_else(|_| "https://ai.hackclub.com".to_string()),
            chat_api_key: env::var("CHAT_API_KEY").ok().map(SecretString::from),
            chat_model: env::var("CHAT_MODEL").ok().filter(|m| !m.is_empty()),
            temperature: env::var("GENERATION_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(0.7),
            max_output_tokens: env::var("GENERATION_MAX_OUTPUT_TOKENS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(2048),
        }
    }

    /// Checks that the selected provider has the credentials it needs.
    pub fn validate_for_production(&self) -> AppResult<()> {
        if self.llm_provider == LlmProvider::Gemini
            && self.gemini_api_key.expose_secret().trim().is_empty()
        {
            return Err(AppError::ValidationError(
                "GEMINI_API_KEY is not set but LLM_PROVIDER is gemini".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::ValidationError(format!(
                "GENERATION_TEMPERATURE must be between 0 and 2, got {}",
                self.temperature
            )));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3001,
            allowed_origin: "http://localhost:5173".to_string(),
            llm_provider: LlmProvider::Gemini,
            gemini_api_key: SecretString::from("test_gemini_key".to_string()),
            gemini_api_base: "http://127.0.0.1:9/v1beta".to_string(),
            gemini_model: "gemini-2.0-flash".to_string(),
            chat_api_base: "http://127.0.0.1:9".to_string(),
            chat_api_key: None,
            chat_model: None,
            temperature: 0.7,
            max_output_tokens: 2048,
        }
    }
}

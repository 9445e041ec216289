use std::sync::Arc;

use crate::{
    config::{Config, LlmProvider},
    services::{
        completion_client::{ChatCompletionClient, CompletionClient},
        gemini_client::GeminiClient,
        question_generator::QuestionGenerator,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_generator: Arc<QuestionGenerator>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = completion_client_for(&config);
        Self::with_client(config, client)
    }

    pub fn with_client(config: Config, client: Arc<dyn CompletionClient>) -> Self {
        Self {
            question_generator: Arc::new(QuestionGenerator::new(client)),
            config: Arc::new(config),
        }
    }
}

fn completion_client_for(config: &Config) -> Arc<dyn CompletionClient> {
    match config.llm_provider {
        LlmProvider::Gemini => {
            log::info!("Using Gemini model {}", config.gemini_model);
            Arc::new(GeminiClient::new(
                config.gemini_api_base.clone(),
                config.gemini_model.clone(),
                config.gemini_api_key.clone(),
                config.temperature,
                config.max_output_tokens,
            ))
        }
        LlmProvider::Chat => {
            log::info!("Using chat completions endpoint {}", config.chat_api_base);
            Arc::new(ChatCompletionClient::new(
                &config.chat_api_base,
                config.chat_api_key.as_ref(),
                config.chat_model.clone(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_builds_for_each_provider() {
        let gemini = AppState::new(Config::test_config());
        assert_eq!(gemini.config.llm_provider, LlmProvider::Gemini);

        let chat = AppState::new(Config {
            llm_provider: LlmProvider::Chat,
            ..Config::test_config()
        });
        assert_eq!(chat.config.llm_provider, LlmProvider::Chat);
    }
}

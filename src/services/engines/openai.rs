use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use crate::errors::{PrlyzerError, PrlyzerResult};
use crate::structs::config::ai_config::AiConfig;
use crate::traits::analysis_engine::AnalysisEngine;

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenAI chat-completions client. Constructed explicitly with its key
/// and injected where needed; the request timeout makes a hung engine
/// call a per-file failure rather than a stuck pipeline.
pub struct OpenAiEngine {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiEngine {
    pub fn new(api_key: String, config: &AiConfig) -> Self {
        Self::with_base_url(api_key, "https://api.openai.com/v1".to_string(), config)
    }

    pub fn with_base_url(api_key: String, base_url: String, config: &AiConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            api_key,
            base_url,
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl AnalysisEngine for OpenAiEngine {
    async fn analyze(&self, prompt: &str) -> PrlyzerResult<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = ChatRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| PrlyzerError::engine_error("chat completion", None, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let operation = if status.as_u16() == 401 {
                "authentication"
            } else {
                "chat completion"
            };
            return Err(PrlyzerError::engine_error(
                operation,
                Some(status.as_u16()),
                &error_text,
            ));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| PrlyzerError::engine_error("response decoding", None, &e.to_string()))?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                PrlyzerError::engine_error("chat completion", None, "response contained no choices")
            })
    }
}

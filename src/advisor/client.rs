use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advisor::parse::parse_suggestion;
use crate::advisor::prompt::{build_review_prompt, build_suggestion_prompt};
use crate::advisor::{AdvisorError, Suggestion, SuggestionSource};
use crate::domain::action::Action;
use crate::engine::GameState;
use crate::infra::config::AdvisorConfig;

const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<RequestMessage<'a>>,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    text: String,
}

/// Клиент Anthropic Messages API.
#[derive(Clone, Debug)]
pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    config: AdvisorConfig,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>, config: AdvisorConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            config,
        }
    }

    /// Один запрос "user prompt -> текст первого блока ответа".
    async fn complete(&self, prompt: &str) -> Result<String, AdvisorError> {
        let request = MessagesRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.config.model, prompt_len = prompt.len(), "advisor request");

        let response = self
            .http
            .post(&self.config.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "advisor request rejected");
            return Err(AdvisorError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = response.json().await?;
        parsed
            .content
            .into_iter()
            .map(|c| c.text)
            .find(|t| !t.trim().is_empty())
            .ok_or(AdvisorError::EmptyResponse)
    }
}

#[async_trait]
impl SuggestionSource for AnthropicClient {
    async fn suggest(&self, state: &GameState, hero: &str) -> Result<Suggestion, AdvisorError> {
        let prompt = build_suggestion_prompt(state, hero);
        let text = self.complete(&prompt).await?;
        parse_suggestion(&text)
    }

    async fn review_hand(&self, history: &[Action], hero: &str) -> Result<String, AdvisorError> {
        let prompt = build_review_prompt(history, hero);
        self.complete(&prompt).await
    }
}

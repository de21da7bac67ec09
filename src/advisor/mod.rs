//! Советник: промпт из снэпшота раздачи, запрос к языковой модели,
//! разбор ответа в `Suggestion`.

pub mod client;
pub mod parse;
pub mod prompt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::action::{Action, ActionKind};
use crate::domain::chips::Chips;
use crate::engine::GameState;

pub use client::AnthropicClient;
pub use parse::parse_suggestion;
pub use prompt::{build_review_prompt, build_suggestion_prompt};

/// Рекомендация советника.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    pub action: ActionKind,
    pub amount: Option<Chips>,
    /// Уверенность в диапазоне [0, 1].
    pub confidence: f64,
    pub reasoning: String,
}

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("Советник выключен: не задан CLAUDE_API_KEY")]
    Disabled,

    #[error("Ошибка HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API вернул {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Пустой ответ модели")]
    EmptyResponse,

    #[error("Некорректный ответ модели: {0}")]
    MalformedResponse(String),
}

/// Источник советов. Реализации: HTTP-клиент и заглушка без ключа.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Совет для игрока `hero` по текущему состоянию.
    async fn suggest(&self, state: &GameState, hero: &str) -> Result<Suggestion, AdvisorError>;

    /// Разбор сыгранной раздачи, свободный текст.
    async fn review_hand(&self, history: &[Action], hero: &str) -> Result<String, AdvisorError>;
}

/// Советник без ключа API: всегда `Disabled`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledAdvisor;

#[async_trait]
impl SuggestionSource for DisabledAdvisor {
    async fn suggest(&self, _state: &GameState, _hero: &str) -> Result<Suggestion, AdvisorError> {
        Err(AdvisorError::Disabled)
    }

    async fn review_hand(&self, _history: &[Action], _hero: &str) -> Result<String, AdvisorError> {
        Err(AdvisorError::Disabled)
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::advisor::AdvisorError;
use crate::domain::errors::DomainError;
use crate::domain::HandId;
use crate::infra::persistence::StoreError;
use crate::vision::VisionError;

/// Ошибки внешнего API (то, что отдаём клиенту).
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "message")]
pub enum ApiError {
    /// Неправильные входные данные (битый JSON, неизвестная карта и т.п.).
    #[error("Некорректный запрос: {0}")]
    BadRequest(String),

    #[error("Сессия {0} не найдена")]
    SessionNotFound(String),

    #[error("Раздача {0} не найдена")]
    HandNotFound(HandId),

    /// Советник выключен или упал.
    #[error("Советник недоступен: {0}")]
    AdvisorUnavailable(String),

    /// Распознавание ещё не реализовано.
    #[error("Распознавание недоступно: {0}")]
    VisionUnavailable(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<AdvisorError> for ApiError {
    fn from(err: AdvisorError) -> Self {
        ApiError::AdvisorUnavailable(err.to_string())
    }
}

impl From<VisionError> for ApiError {
    fn from(err: VisionError) -> Self {
        match err {
            VisionError::Unavailable(_) => ApiError::VisionUnavailable(err.to_string()),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::HandNotFound(id) => ApiError::HandNotFound(id),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

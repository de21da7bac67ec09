use thiserror::Error;

/// Ошибки разбора внешнего текста в доменные типы.
///
/// Возникают только на границе (распознавание, транспорт, ответ советника) –
/// сам трекер раздачи никогда не падает.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Некорректная карта: {0:?}")]
    InvalidCard(String),

    #[error("Неизвестный тип действия: {0:?}")]
    InvalidActionKind(String),

    #[error("Неизвестная улица: {0:?}")]
    InvalidStreet(String),
}

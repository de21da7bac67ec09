//! Доменная модель: карты, фишки, улицы, игроки, действия.

pub mod action;
pub mod card;
pub mod chips;
pub mod errors;
pub mod player;
pub mod street;

/// Индекс места за столом.
pub type SeatIndex = u8;

// Суррогатные ключи хранилища.
pub type HandId = u64;
pub type ActionId = u64;
pub type SuggestionId = u64;
pub type OutcomeId = u64;

/// Идентификатор сессии транспорта (приходит из URL).
pub type SessionId = String;

pub use action::*;
pub use card::*;
pub use chips::*;
pub use errors::*;
pub use player::*;
pub use street::*;

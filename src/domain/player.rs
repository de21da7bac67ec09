use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::SeatIndex;

/// Игрок в отслеживаемой раздаче. Ключ – имя, уникальное в пределах раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// Текущий стек.
    pub stack: Chips,
    /// Индекс места за столом.
    pub position: SeatIndex,
    pub is_active: bool,
    /// Карманные карты (0 – неизвестны, иначе пара).
    pub cards: Vec<Card>,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: Chips, position: SeatIndex) -> Self {
        Self {
            name: name.into(),
            stack,
            position,
            is_active: true,
            cards: Vec::new(),
        }
    }

    pub fn has_known_cards(&self) -> bool {
        !self.cards.is_empty()
    }

    /// Сброс на границе раздач: стек и место сохраняются.
    pub fn reset_for_new_hand(&mut self) {
        self.cards.clear();
        self.is_active = true;
    }
}

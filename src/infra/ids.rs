use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::{ActionId, HandId, OutcomeId, SuggestionId};

/// Генерация суррогатных ключей хранилища на монотонных счётчиках.
#[derive(Debug)]
pub struct IdGenerator {
    hand_counter: AtomicU64,
    action_counter: AtomicU64,
    suggestion_counter: AtomicU64,
    outcome_counter: AtomicU64,
}

impl IdGenerator {
    /// Создать генератор с начальным значением 1 для всех сущностей.
    pub fn new() -> Self {
        Self {
            hand_counter: AtomicU64::new(1),
            action_counter: AtomicU64::new(1),
            suggestion_counter: AtomicU64::new(1),
            outcome_counter: AtomicU64::new(1),
        }
    }

    #[inline]
    pub fn next_hand_id(&self) -> HandId {
        self.hand_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_action_id(&self) -> ActionId {
        self.action_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_suggestion_id(&self) -> SuggestionId {
        self.suggestion_counter.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn next_outcome_id(&self) -> OutcomeId {
        self.outcome_counter.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

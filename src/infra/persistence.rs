use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::advisor::Suggestion;
use crate::domain::action::{unix_millis, Action, ActionKind};
use crate::domain::chips::Chips;
use crate::domain::street::Street;
use crate::domain::{ActionId, HandId, OutcomeId, SeatIndex, SuggestionId};
use crate::engine::GameState;
use crate::infra::ids::IdGenerator;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Раздача {0} не найдена")]
    HandNotFound(HandId),

    #[error("Действие {0} не найдено")]
    ActionNotFound(ActionId),
}

/// Метаданные раздачи на момент её начала.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandMeta {
    pub table_name: String,
    pub max_players: u8,
    /// Фишки в игре на старте: стеки плюс уже внесённое в банк.
    pub starting_stack: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl HandMeta {
    pub fn from_state(state: &GameState, table_name: impl Into<String>, max_players: u8) -> Self {
        Self {
            table_name: table_name.into(),
            max_players,
            starting_stack: state
                .players()
                .map(|p| p.stack + state.contributed(&p.name))
                .sum(),
            small_blind: state.small_blind(),
            big_blind: state.big_blind(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandRecord {
    pub id: HandId,
    pub timestamp_ms: u64,
    pub meta: HandMeta,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionRecord {
    pub player_name: String,
    pub action_type: ActionKind,
    pub amount: Option<Chips>,
    pub street: Street,
    /// Место игрока, если он был известен трекеру.
    pub position: Option<SeatIndex>,
    pub timestamp_ms: u64,
}

impl ActionRecord {
    pub fn from_action(action: &Action, position: Option<SeatIndex>) -> Self {
        Self {
            player_name: action.player.clone(),
            action_type: action.kind,
            amount: action.amount,
            street: action.street,
            position,
            timestamp_ms: action.timestamp_ms,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredAction {
    pub id: ActionId,
    pub hand_id: HandId,
    #[serde(flatten)]
    pub record: ActionRecord,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SuggestionRecord {
    pub suggested_action: ActionKind,
    pub suggested_amount: Option<Chips>,
    pub confidence: f64,
    pub reasoning: String,
    pub timestamp_ms: u64,
}

impl From<&Suggestion> for SuggestionRecord {
    fn from(s: &Suggestion) -> Self {
        Self {
            suggested_action: s.action,
            suggested_amount: s.amount,
            confidence: s.confidence,
            reasoning: s.reasoning.clone(),
            timestamp_ms: unix_millis(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoredSuggestion {
    pub id: SuggestionId,
    pub action_id: ActionId,
    #[serde(flatten)]
    pub record: SuggestionRecord,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutcomeRecord {
    pub player_name: String,
    pub final_stack: Chips,
    pub profit_loss: f64,
    /// Например "Two Pair". Трекер руки не оценивает – приходит снаружи.
    pub hand_rank: Option<String>,
    pub timestamp_ms: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoredOutcome {
    pub id: OutcomeId,
    pub hand_id: HandId,
    #[serde(flatten)]
    pub record: OutcomeRecord,
}

/// Полная история раздачи из хранилища.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandHistoryRecord {
    pub hand: HandRecord,
    pub actions: Vec<StoredAction>,
    pub suggestions: Vec<StoredSuggestion>,
    pub outcomes: Vec<StoredOutcome>,
}

/// Статистика игрока по записанным итогам.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayerStats {
    pub total_hands: u64,
    /// Доля раздач с положительным результатом.
    pub win_rate: f64,
    pub avg_profit: f64,
}

/// Абстракция хранилища раздач.
///
/// Со стороны трекера – только запись; чтение нужно REST-слою.
pub trait HandStore: Send {
    fn create_hand(&mut self, meta: HandMeta) -> HandId;

    fn record_action(&mut self, hand_id: HandId, record: ActionRecord) -> Result<ActionId, StoreError>;

    fn record_suggestion(&mut self, action_id: ActionId, record: SuggestionRecord) -> Result<SuggestionId, StoreError>;

    fn record_outcome(&mut self, hand_id: HandId, record: OutcomeRecord) -> Result<OutcomeId, StoreError>;

    fn hand_history(&self, hand_id: HandId) -> Option<HandHistoryRecord>;

    fn player_stats(&self, player_name: &str) -> PlayerStats;
}

/// In-memory реализация для тестов и локального запуска.
#[derive(Debug, Default)]
pub struct InMemoryHandStore {
    ids: IdGenerator,
    hands: BTreeMap<HandId, HandRecord>,
    actions: BTreeMap<ActionId, StoredAction>,
    suggestions: Vec<StoredSuggestion>,
    outcomes: Vec<StoredOutcome>,
}

impl InMemoryHandStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand_count(&self) -> usize {
        self.hands.len()
    }
}

impl HandStore for InMemoryHandStore {
    fn create_hand(&mut self, meta: HandMeta) -> HandId {
        let id = self.ids.next_hand_id();
        self.hands.insert(
            id,
            HandRecord {
                id,
                timestamp_ms: unix_millis(),
                meta,
            },
        );
        id
    }

    fn record_action(&mut self, hand_id: HandId, record: ActionRecord) -> Result<ActionId, StoreError> {
        if !self.hands.contains_key(&hand_id) {
            return Err(StoreError::HandNotFound(hand_id));
        }
        let id = self.ids.next_action_id();
        self.actions.insert(id, StoredAction { id, hand_id, record });
        Ok(id)
    }

    fn record_suggestion(&mut self, action_id: ActionId, record: SuggestionRecord) -> Result<SuggestionId, StoreError> {
        if !self.actions.contains_key(&action_id) {
            return Err(StoreError::ActionNotFound(action_id));
        }
        let id = self.ids.next_suggestion_id();
        self.suggestions.push(StoredSuggestion { id, action_id, record });
        Ok(id)
    }

    fn record_outcome(&mut self, hand_id: HandId, record: OutcomeRecord) -> Result<OutcomeId, StoreError> {
        if !self.hands.contains_key(&hand_id) {
            return Err(StoreError::HandNotFound(hand_id));
        }
        let id = self.ids.next_outcome_id();
        self.outcomes.push(StoredOutcome { id, hand_id, record });
        Ok(id)
    }

    fn hand_history(&self, hand_id: HandId) -> Option<HandHistoryRecord> {
        let hand = self.hands.get(&hand_id)?.clone();

        let actions: Vec<StoredAction> = self
            .actions
            .values()
            .filter(|a| a.hand_id == hand_id)
            .cloned()
            .collect();

        let suggestions = self
            .suggestions
            .iter()
            .filter(|s| actions.iter().any(|a| a.id == s.action_id))
            .cloned()
            .collect();

        let outcomes = self
            .outcomes
            .iter()
            .filter(|o| o.hand_id == hand_id)
            .cloned()
            .collect();

        Some(HandHistoryRecord {
            hand,
            actions,
            suggestions,
            outcomes,
        })
    }

    fn player_stats(&self, player_name: &str) -> PlayerStats {
        let results: Vec<f64> = self
            .outcomes
            .iter()
            .filter(|o| o.record.player_name == player_name)
            .map(|o| o.record.profit_loss)
            .collect();

        if results.is_empty() {
            return PlayerStats::default();
        }

        let total = results.len() as f64;
        let wins = results.iter().filter(|&&p| p > 0.0).count() as f64;
        let profit: f64 = results.iter().sum();

        PlayerStats {
            total_hands: results.len() as u64,
            win_rate: wins / total,
            avg_profit: profit / total,
        }
    }
}

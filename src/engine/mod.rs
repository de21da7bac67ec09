//! Трекер раздачи: игроки, стеки, банк, улицы, история действий.
//!
//! Высокоуровневый объект: `GameState`
//! Основные операции:
//!   - `record_action` – записать действие и обновить банк/стек
//!   - `advance_street` – перейти на следующую улицу
//!   - `reset_hand` – граница раздач

pub mod game_state;
pub mod hand_history;
pub mod pot;

pub use game_state::GameState;
pub use hand_history::ActionHistory;
pub use pot::Pot;

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::action::ActionKind;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::street::Street;
use crate::domain::{HandId, SeatIndex};

/// DTO игрока для клиента.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerDto {
    pub name: String,
    pub stack: Chips,
    pub position: SeatIndex,
    pub is_active: bool,
    /// Пустой список, если карты неизвестны.
    pub cards: Vec<Card>,
}

/// Последнее действие в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct LastActionDto {
    pub player: String,
    pub action: ActionKind,
    pub amount: Option<Chips>,
    pub street: Street,
}

/// Снэпшот состояния – единственное, что трекер отдаёт наружу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateDto {
    pub street: Street,
    pub pot: Chips,
    pub community_cards: Vec<Card>,
    pub current_bet: Chips,
    /// Только активные игроки.
    pub players: Vec<PlayerDto>,
    pub last_action: Option<LastActionDto>,
    /// Номер раздачи в хранилище, если она уже записывается.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub hand_id: Option<HandId>,
}

/// Совет для клиента.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SuggestionDto {
    pub action: ActionKind,
    pub amount: Option<Chips>,
    pub confidence: f64,
    pub reasoning: String,
}

/// Кадр от сервера по WebSocket.
///
/// ```json
/// {"type": "game_state", "data": {...}}
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    GameState(GameStateDto),
    AiSuggestion(SuggestionDto),
    Error(ApiError),
}

/// Ответ корня REST.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WelcomeDto {
    pub message: String,
}

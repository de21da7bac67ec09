use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::domain::action::{Action, ActionKind};
use crate::domain::card::{parse_cards, Card};
use crate::domain::chips::Chips;
use crate::domain::street::Street;
use crate::domain::SeatIndex;
use crate::engine::GameState;

/// Максимум карт на борде.
pub const MAX_COMMUNITY_CARDS: usize = 5;
/// Карманных карт в холдеме.
pub const HOLE_CARDS: usize = 2;

/// Кадр от клиента (расширение браузера / фронт) по WebSocket.
///
/// ```json
/// {"type": "game_state_update", "data": {...}, "player_name": "hero"}
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientMessage {
    #[serde(rename = "type")]
    pub kind: ClientMessageKind,
    #[serde(default)]
    pub data: GameStateUpdate,
    /// Если задано – после обновления просим совет для этого игрока.
    #[serde(default)]
    pub player_name: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClientMessageKind {
    /// Результаты распознавания со стола.
    GameStateUpdate,
    /// Просто прислать текущее состояние.
    GetState,
}

/// Наблюдения источника распознавания. Все поля опциональны.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStateUpdate {
    /// Игроки, которых надо (пере)регистрировать.
    pub players: Vec<SeatPlayerUpdate>,
    pub blinds: Option<BlindsUpdate>,
    pub dealer_position: Option<SeatIndex>,
    /// Полный борд (замена, не добавление).
    pub community_cards: Option<Vec<String>>,
    /// Имя -> карманные карты.
    pub player_cards: BTreeMap<String, Vec<String>>,
    /// Игроки, выбывшие из раздачи.
    pub inactive_players: Vec<String>,
    /// Действия в порядке наблюдения.
    pub actions: Vec<ObservedAction>,
    /// Ставка к уравниванию после этих действий.
    pub current_bet: Option<Chips>,
    pub advance_street: bool,
    /// Итоги раздачи (обычно вместе с `reset_hand`).
    pub outcomes: Vec<OutcomeUpdate>,
    /// Раздача закончена: архивировать и сбросить.
    pub reset_hand: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatPlayerUpdate {
    pub name: String,
    pub stack: Chips,
    pub position: SeatIndex,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlindsUpdate {
    pub small_blind: Chips,
    pub big_blind: Chips,
}

/// Наблюдённое действие в "сыром" виде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ObservedAction {
    pub player: String,
    pub action_type: String,
    #[serde(default)]
    pub amount: Option<Chips>,
    /// Без улицы берём текущую улицу трекера.
    #[serde(default)]
    pub street: Option<String>,
}

/// Итог раздачи для одного игрока.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OutcomeUpdate {
    pub player: String,
    pub final_stack: Chips,
    /// Выигрыш (+) или проигрыш (-) за раздачу, в фишках (может быть дробным).
    pub profit_loss: f64,
    #[serde(default)]
    pub hand_rank: Option<String>,
}

/// Что реально изменилось после применения обновления.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppliedUpdate {
    /// Записанные действия (копии из истории).
    pub recorded: Vec<Action>,
    /// Улица после `advance_street`, если он был запрошен.
    pub street_advanced: Option<Street>,
    pub outcomes: Vec<OutcomeUpdate>,
    /// Клиент просит закрыть раздачу. Сброс делает вызывающий код,
    /// после архивации.
    pub reset_requested: bool,
}

/// Уже разобранное действие.
struct ParsedAction<'a> {
    player: &'a str,
    kind: ActionKind,
    amount: Option<Chips>,
    street: Option<Street>,
}

/// Применить обновление к состоянию.
///
/// Сначала проверяется весь текст (карты, типы действий, улицы, размеры),
/// и только потом состояние меняется. Невалидное обновление не меняет ничего.
pub fn apply_update(state: &mut GameState, update: GameStateUpdate) -> Result<AppliedUpdate, ApiError> {
    let board = match &update.community_cards {
        Some(tokens) => {
            if tokens.len() > MAX_COMMUNITY_CARDS {
                return Err(ApiError::BadRequest(format!(
                    "на борде не больше {MAX_COMMUNITY_CARDS} карт, получено {}",
                    tokens.len()
                )));
            }
            Some(parse_cards(tokens)?)
        }
        None => None,
    };

    let mut hole_cards: Vec<(&str, Vec<Card>)> = Vec::with_capacity(update.player_cards.len());
    for (name, tokens) in &update.player_cards {
        // Пусто – карты неизвестны; иначе только полная пара.
        if !tokens.is_empty() && tokens.len() != HOLE_CARDS {
            return Err(ApiError::BadRequest(format!(
                "у игрока {name} должно быть 0 или {HOLE_CARDS} карты, получено {}",
                tokens.len()
            )));
        }
        hole_cards.push((name.as_str(), parse_cards(tokens)?));
    }

    let actions = update
        .actions
        .iter()
        .map(|a| -> Result<ParsedAction<'_>, ApiError> {
            Ok(ParsedAction {
                player: a.player.as_str(),
                kind: a.action_type.parse()?,
                amount: a.amount,
                street: a.street.as_deref().map(str::parse::<Street>).transpose()?,
            })
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    // Дальше только мутации – ошибок больше быть не может.
    for p in &update.players {
        state.add_player(p.name.clone(), p.stack, p.position);
    }
    if let Some(blinds) = update.blinds {
        state.set_blinds(blinds.small_blind, blinds.big_blind);
    }
    if let Some(pos) = update.dealer_position {
        state.set_dealer_position(pos);
    }
    if let Some(cards) = board {
        state.deal_community_cards(cards);
    }
    for (name, cards) in hole_cards {
        state.deal_player_cards(name, cards);
    }
    for name in &update.inactive_players {
        state.set_player_active(name, false);
    }

    let mut recorded = Vec::with_capacity(actions.len());
    for a in actions {
        let street = a.street.unwrap_or_else(|| state.street());
        recorded.push(state.record_action(a.player, a.kind, a.amount, street).clone());
    }

    if let Some(bet) = update.current_bet {
        state.set_current_bet(bet);
    }

    let street_advanced = update.advance_street.then(|| state.advance_street());

    Ok(AppliedUpdate {
        recorded,
        street_advanced,
        outcomes: update.outcomes,
        reset_requested: update.reset_hand,
    })
}

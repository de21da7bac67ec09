use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::action::{Action, ActionKind};
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::street::Street;
use crate::domain::SeatIndex;
use crate::engine::hand_history::ActionHistory;
use crate::engine::pot::Pot;

/// Состояние одной отслеживаемой раздачи.
///
/// Все операции тотальны: неизвестный игрок – это `None`/игнор, а не ошибка,
/// переход дальше шоудауна – no-op. Синхронизацию доступа обеспечивает
/// владелец (сессия транспорта), сам объект не потокобезопасен.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    /// Игроки по имени. Порядок обхода – по имени, стабилен в пределах сессии.
    players: BTreeMap<String, Player>,
    community_cards: Vec<Card>,
    street: Street,
    pot: Pot,
    current_bet: Chips,
    small_blind: Chips,
    big_blind: Chips,
    dealer_position: SeatIndex,
    history: ActionHistory,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------
    // Реестр игроков
    // ---------------------------------------------------------------

    /// Добавить игрока. Повторное имя молча заменяет прежнюю запись
    /// (стек, место, карты и активность берутся заново).
    pub fn add_player(&mut self, name: impl Into<String>, stack: Chips, position: SeatIndex) {
        let name = name.into();
        if self.players.contains_key(&name) {
            debug!(player = %name, "player entry replaced");
        }
        self.players.insert(name.clone(), Player::new(name, stack, position));
    }

    /// Удалить игрока. Неизвестное имя – no-op.
    pub fn remove_player(&mut self, name: &str) -> Option<Player> {
        self.players.remove(name)
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.get(name)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn is_player_active(&self, name: &str) -> Option<bool> {
        self.players.get(name).map(|p| p.is_active)
    }

    pub fn get_player_position(&self, name: &str) -> Option<SeatIndex> {
        self.players.get(name).map(|p| p.position)
    }

    pub fn get_player_stack(&self, name: &str) -> Option<Chips> {
        self.players.get(name).map(|p| p.stack)
    }

    /// Пометить игрока активным/выбывшим. Возвращает false для неизвестного имени.
    pub fn set_player_active(&mut self, name: &str, active: bool) -> bool {
        match self.players.get_mut(name) {
            Some(p) => {
                p.is_active = active;
                true
            }
            None => false,
        }
    }

    // ---------------------------------------------------------------
    // Параметры стола
    // ---------------------------------------------------------------

    pub fn set_blinds(&mut self, small_blind: Chips, big_blind: Chips) {
        self.small_blind = small_blind;
        self.big_blind = big_blind;
    }

    pub fn set_dealer_position(&mut self, position: SeatIndex) {
        self.dealer_position = position;
    }

    /// Ставку к уравниванию выставляет вызывающий код: рекордер её не трогает.
    pub fn set_current_bet(&mut self, amount: Chips) {
        self.current_bet = amount;
    }

    // ---------------------------------------------------------------
    // Раздача карт
    // ---------------------------------------------------------------

    /// Выдать карманные карты известному игроку. Для неизвестного – игнор.
    pub fn deal_player_cards(&mut self, name: &str, cards: Vec<Card>) -> bool {
        match self.players.get_mut(name) {
            Some(p) => {
                p.cards = cards;
                true
            }
            None => {
                debug!(player = %name, "cards for unknown player ignored");
                false
            }
        }
    }

    /// Заменить борд целиком (не дописывает).
    pub fn deal_community_cards(&mut self, cards: Vec<Card>) {
        self.community_cards = cards;
    }

    // ---------------------------------------------------------------
    // Действия
    // ---------------------------------------------------------------

    /// Записать действие.
    ///
    /// Запись в историю безусловна, даже для неизвестного игрока.
    /// Денежное действие с ненулевой суммой увеличивает банк на всю сумму;
    /// стек известного игрока уменьшается, но не уходит ниже нуля.
    /// All-in без суммы переносит в банк весь остаток стека известного игрока.
    pub fn record_action(
        &mut self,
        player: &str,
        kind: ActionKind,
        amount: Option<Chips>,
        street: Street,
    ) -> &Action {
        let amount = match (kind, amount) {
            (ActionKind::AllIn, None) => self.players.get(player).map(|p| p.stack),
            (_, a) => a,
        };

        let action = Action::new(player, kind, amount, street);

        if let Some(chips) = action.chip_amount() {
            self.pot.add(player, chips);

            if let Some(p) = self.players.get_mut(player) {
                if chips > p.stack {
                    warn!(
                        player = %player,
                        stack = %p.stack,
                        amount = %chips,
                        "action exceeds stack, stack floored at zero"
                    );
                }
                p.stack -= chips;
            }
        }

        debug!(
            player = %player,
            kind = %kind,
            amount = ?action.amount,
            street = %street,
            pot = %self.pot.total,
            "action recorded"
        );

        self.history.push(action);
        // Только что положили – история не пуста.
        &self.history.as_slice()[self.history.len() - 1]
    }

    // ---------------------------------------------------------------
    // Улицы
    // ---------------------------------------------------------------

    /// Сдвинуть улицу ровно на один шаг. На шоудауне ничего не делает.
    pub fn advance_street(&mut self) -> Street {
        match self.street.next() {
            Some(next) => {
                debug!(from = %self.street, to = %next, "street advanced");
                self.street = next;
            }
            None => debug!("advance past showdown ignored"),
        }
        self.street
    }

    // ---------------------------------------------------------------
    // Запросы
    // ---------------------------------------------------------------

    pub fn get_active_players(&self) -> Vec<&Player> {
        self.players.values().filter(|p| p.is_active).collect()
    }

    /// Вся история или только действия одного игрока.
    pub fn get_action_history(&self, player: Option<&str>) -> Vec<&Action> {
        match player {
            Some(name) => self.history.for_player(name).collect(),
            None => self.history.iter().collect(),
        }
    }

    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    pub fn last_action(&self) -> Option<&Action> {
        self.history.last()
    }

    pub fn get_current_bet_to_call(&self) -> Chips {
        self.current_bet
    }

    pub fn street(&self) -> Street {
        self.street
    }

    pub fn pot(&self) -> Chips {
        self.pot.total
    }

    /// Сколько игрок внёс в банк в этой раздаче.
    pub fn contributed(&self, player: &str) -> Chips {
        self.pot.contributed(player)
    }

    pub fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    pub fn small_blind(&self) -> Chips {
        self.small_blind
    }

    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }

    pub fn dealer_position(&self) -> SeatIndex {
        self.dealer_position
    }

    /// Фишки в игре: сумма стеков всех зарегистрированных игроков.
    pub fn chips_in_play(&self) -> Chips {
        self.players.values().map(|p| p.stack).sum()
    }

    // ---------------------------------------------------------------
    // Граница раздач
    // ---------------------------------------------------------------

    /// Сброс перед новой раздачей. Стеки, места, блайнды и баттон сохраняются.
    pub fn reset_hand(&mut self) {
        self.community_cards.clear();
        self.street = Street::Preflop;
        self.pot.reset();
        self.current_bet = Chips::ZERO;
        self.history.clear();

        for p in self.players.values_mut() {
            p.reset_for_new_hand();
        }

        debug!(players = self.players.len(), "hand reset");
    }
}

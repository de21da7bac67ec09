use core::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::domain::errors::DomainError;
use crate::domain::street::Street;

/// Тип действия игрока.
///
/// Один закрытый набор для трекера, хранилища, транспорта и советника.
/// Свободный текст превращается в него только через `FromStr`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl ActionKind {
    /// Двигает ли действие фишки из стека в банк.
    pub fn moves_chips(self) -> bool {
        matches!(
            self,
            ActionKind::Call | ActionKind::Bet | ActionKind::Raise | ActionKind::AllIn
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Fold => "fold",
            ActionKind::Check => "check",
            ActionKind::Call => "call",
            ActionKind::Bet => "bet",
            ActionKind::Raise => "raise",
            ActionKind::AllIn => "all_in",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Регистр не важен; для all-in принимаем несколько написаний.
impl FromStr for ActionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(ActionKind::Fold),
            "check" => Ok(ActionKind::Check),
            "call" => Ok(ActionKind::Call),
            "bet" => Ok(ActionKind::Bet),
            "raise" => Ok(ActionKind::Raise),
            "all_in" | "all-in" | "allin" | "all in" => Ok(ActionKind::AllIn),
            _ => Err(DomainError::InvalidActionKind(s.to_string())),
        }
    }
}

/// Записанное действие. Создаётся один раз и больше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Action {
    /// Имя игрока. Может ссылаться на уже удалённого игрока.
    pub player: String,
    pub kind: ActionKind,
    /// Есть только у call/bet/raise/all-in.
    pub amount: Option<Chips>,
    pub street: Street,
    /// Unix timestamp в миллисекундах.
    pub timestamp_ms: u64,
}

impl Action {
    pub fn new(player: impl Into<String>, kind: ActionKind, amount: Option<Chips>, street: Street) -> Self {
        Self {
            player: player.into(),
            kind,
            amount,
            street,
            timestamp_ms: unix_millis(),
        }
    }

    /// Сумма, которая реально идёт в банк: только для денежных действий
    /// и только если она ненулевая.
    pub fn chip_amount(&self) -> Option<Chips> {
        match self.amount {
            Some(a) if self.kind.moves_chips() && !a.is_zero() => Some(a),
            _ => None,
        }
    }
}

/// Текущее время (Unix, миллисекунды).
pub fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Банк текущей раздачи.
///
/// `total` всегда равен сумме всех вкладов с последнего сброса,
/// включая вклады игроков, которых трекер не знает.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
    /// Сколько внёс каждый игрок (по имени).
    contributions: BTreeMap<String, Chips>,
}

impl Pot {
    pub fn add(&mut self, player: &str, amount: Chips) {
        self.total += amount;
        *self.contributions.entry(player.to_string()).or_insert(Chips::ZERO) += amount;
    }

    /// Вклад игрока в банк этой раздачи (0, если ничего не ставил).
    pub fn contributed(&self, player: &str) -> Chips {
        self.contributions.get(player).copied().unwrap_or(Chips::ZERO)
    }

    pub fn reset(&mut self) {
        self.total = Chips::ZERO;
        self.contributions.clear();
    }
}

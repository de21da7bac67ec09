use serde::{Deserialize, Serialize};

use crate::domain::action::Action;

/// Журнал действий раздачи. Только добавление, порядок сохраняется.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionHistory {
    actions: Vec<Action>,
}

impl ActionHistory {
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Последнее записанное действие.
    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    /// Действия одного игрока в исходном порядке.
    ///
    /// Действия живут столько же, сколько журнал, а не строка фильтра.
    pub fn for_player<'a, 'b>(&'a self, player: &'b str) -> impl Iterator<Item = &'a Action> + 'b
    where
        'a: 'b,
    {
        self.actions.iter().filter(move |a| a.player == player)
    }

    /// Последние `n` действий (или все, если их меньше).
    pub fn tail(&self, n: usize) -> &[Action] {
        let start = self.actions.len().saturating_sub(n);
        &self.actions[start..]
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}

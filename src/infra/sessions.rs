use std::collections::HashMap;

use tracing::info;

use crate::domain::{ActionId, HandId};
use crate::engine::GameState;

/// Сессия транспорта: трекер раздачи плюс привязка к записям хранилища.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub state: GameState,
    /// Раздача в хранилище, которая сейчас пишется (None – ещё не начата).
    pub hand_id: Option<HandId>,
    /// Последнее записанное действие – к нему привязываются советы.
    pub last_action_id: Option<ActionId>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Закрыть раздачу: сбросить трекер и отвязаться от записи.
    pub fn finish_hand(&mut self) {
        self.state.reset_hand();
        self.hand_id = None;
        self.last_action_id = None;
    }
}

/// Реестр сессий. Живёт в транспортном слое.
///
/// Сессия создаётся при первом обращении и удаляется только явно,
/// отключение клиента её не трогает.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Получить сессию, создав пустую при первом обращении.
    pub fn get_or_create(&mut self, session_id: &str) -> &mut Session {
        self.sessions.entry(session_id.to_string()).or_insert_with(|| {
            info!(session = %session_id, "session created");
            Session::new()
        })
    }

    pub fn get(&self, session_id: &str) -> Option<&Session> {
        self.sessions.get(session_id)
    }

    /// Явное удаление. Возвращает удалённую сессию, если она была.
    pub fn evict(&mut self, session_id: &str) -> Option<Session> {
        let removed = self.sessions.remove(session_id);
        if removed.is_some() {
            info!(session = %session_id, "session evicted");
        }
        removed
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.sessions.contains_key(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Идентификаторы сессий в отсортированном порядке.
    pub fn session_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.sessions.keys().cloned().collect();
        ids.sort();
        ids
    }
}

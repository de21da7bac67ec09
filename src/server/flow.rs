use tracing::{info, warn};

use crate::api::{
    apply_update, build_game_state_view, build_suggestion_view, AppliedUpdate, ApiError,
    ClientMessage, ClientMessageKind, GameStateDto, OutcomeUpdate, ServerMessage,
};
use crate::domain::action::unix_millis;
use crate::infra::persistence::{ActionRecord, HandMeta, HandStore, OutcomeRecord, SuggestionRecord};
use crate::infra::sessions::Session;
use crate::server::AppState;

/// Обработать один кадр клиента и вернуть ответы в порядке отправки.
///
/// Порядок: `error` (если обновление отклонено), `ai_suggestion` (если просили),
/// `game_state` (всегда последним).
pub async fn handle_client_message(state: &AppState, session_id: &str, msg: ClientMessage) -> Vec<ServerMessage> {
    let mut replies = Vec::new();

    let (snapshot, view, last_action_id, accepted) = {
        let mut sessions = state.sessions.lock().await;
        let session = sessions.get_or_create(session_id);

        let mut accepted = true;
        if msg.kind == ClientMessageKind::GameStateUpdate {
            match apply_update(&mut session.state, msg.data) {
                Ok(applied) => {
                    let mut store = state.store.lock().await;
                    if let Err(err) = persist_update(&mut *store, session, session_id, &applied) {
                        warn!(session = %session_id, error = %err, "failed to persist update");
                        replies.push(ServerMessage::Error(err));
                    }
                }
                Err(err) => {
                    warn!(session = %session_id, error = %err, "update rejected");
                    replies.push(ServerMessage::Error(err));
                    accepted = false;
                }
            }
        }

        let view = build_game_state_view(&session.state, session.hand_id);
        (session.state.clone(), view, session.last_action_id, accepted)
    };

    if let Some(hero) = msg.player_name.filter(|_| accepted) {
        match state.advisor.suggest(&snapshot, &hero).await {
            Ok(suggestion) => {
                if let Some(action_id) = last_action_id {
                    let mut store = state.store.lock().await;
                    if let Err(err) = store.record_suggestion(action_id, SuggestionRecord::from(&suggestion)) {
                        warn!(session = %session_id, error = %err, "failed to store suggestion");
                    }
                }
                replies.push(ServerMessage::AiSuggestion(build_suggestion_view(&suggestion)));
            }
            Err(err) => {
                warn!(session = %session_id, error = %err, "suggestion failed");
                replies.push(ServerMessage::Error(ApiError::from(err)));
            }
        }
    }

    replies.push(ServerMessage::GameState(view));
    replies
}

/// Записать в хранилище всё, что принесло обновление.
///
/// Раздача в хранилище заводится при первом действии или итоге.
/// `reset_hand` закрывает её после записи итогов. Граница раздачи
/// соблюдается и тогда, когда запись не удалась: ошибка возвращается
/// уже после сброса.
pub fn persist_update(
    store: &mut dyn HandStore,
    session: &mut Session,
    table_name: &str,
    applied: &AppliedUpdate,
) -> Result<(), ApiError> {
    let written = write_records(store, session, table_name, applied);

    if applied.reset_requested {
        if let Some(hand_id) = session.hand_id {
            info!(session = %table_name, hand_id, "hand finished");
        }
        session.finish_hand();
    }

    written
}

fn write_records(
    store: &mut dyn HandStore,
    session: &mut Session,
    table_name: &str,
    applied: &AppliedUpdate,
) -> Result<(), ApiError> {
    let has_records = !applied.recorded.is_empty() || !applied.outcomes.is_empty();

    if has_records && session.hand_id.is_none() {
        let max_players = u8::try_from(session.state.players().count()).unwrap_or(u8::MAX);
        let hand_id = store.create_hand(HandMeta::from_state(&session.state, table_name, max_players));
        info!(session = %table_name, hand_id, "hand started");
        session.hand_id = Some(hand_id);
    }

    let Some(hand_id) = session.hand_id else {
        return Ok(());
    };

    for action in &applied.recorded {
        let position = session.state.get_player_position(&action.player);
        let id = store.record_action(hand_id, ActionRecord::from_action(action, position))?;
        session.last_action_id = Some(id);
    }

    for outcome in &applied.outcomes {
        store.record_outcome(hand_id, outcome_record(outcome))?;
    }

    Ok(())
}

fn outcome_record(outcome: &OutcomeUpdate) -> OutcomeRecord {
    OutcomeRecord {
        player_name: outcome.player.clone(),
        final_stack: outcome.final_stack,
        profit_loss: outcome.profit_loss,
        hand_rank: outcome.hand_rank.clone(),
        timestamp_ms: unix_millis(),
    }
}

/// Снэпшот сессии без создания новой.
pub async fn session_view(state: &AppState, session_id: &str) -> Result<GameStateDto, ApiError> {
    let sessions = state.sessions.lock().await;
    let session = sessions
        .get(session_id)
        .ok_or_else(|| ApiError::SessionNotFound(session_id.to_string()))?;
    Ok(build_game_state_view(&session.state, session.hand_id))
}

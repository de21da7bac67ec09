use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::Response;
use tracing::{debug, info, warn};

use crate::api::{ApiError, ClientMessage, ServerMessage};
use crate::server::flow::handle_client_message;
use crate::server::AppState;

/// GET /ws/:session_id
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Path(session_id): Path<String>,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, session_id, state))
}

/// Цикл одного соединения. Битый кадр – ответ `error`, соединение живёт дальше.
/// Отключение сессию не удаляет.
async fn handle_socket(mut socket: WebSocket, session_id: String, state: AppState) {
    state.sessions.lock().await.get_or_create(&session_id);
    info!(session = %session_id, "client connected");

    'conn: while let Some(frame) = socket.recv().await {
        let frame = match frame {
            Ok(f) => f,
            Err(err) => {
                warn!(session = %session_id, error = %err, "websocket receive failed");
                break;
            }
        };

        let replies = match frame {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(msg) => handle_client_message(&state, &session_id, msg).await,
                Err(err) => vec![ServerMessage::Error(ApiError::from(err))],
            },
            Message::Close(_) => break,
            _ => continue,
        };

        for reply in replies {
            let text = match serde_json::to_string(&reply) {
                Ok(t) => t,
                Err(err) => {
                    warn!(session = %session_id, error = %err, "failed to encode reply");
                    continue;
                }
            };
            if socket.send(Message::Text(text)).await.is_err() {
                debug!(session = %session_id, "send failed, closing");
                break 'conn;
            }
        }
    }

    info!(session = %session_id, "client disconnected");
}

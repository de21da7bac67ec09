use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::{ApiError, GameStateDto, WelcomeDto};
use crate::domain::HandId;
use crate::infra::persistence::{HandHistoryRecord, PlayerStats};
use crate::server::flow::session_view;
use crate::server::AppState;
use crate::vision::{capture_checked, Frame, RecognizedCard, ScreenRegion, VisionError};

/// Ответ на запрос разбора раздачи.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewDto {
    pub player: String,
    pub review: String,
}

/// GET /
pub async fn root() -> Json<WelcomeDto> {
    Json(WelcomeDto {
        message: "Welcome to Pokerit API".to_string(),
    })
}

/// GET /sessions/:session_id
pub async fn get_session_state(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<GameStateDto>, ApiError> {
    session_view(&state, &session_id).await.map(Json)
}

/// DELETE /sessions/:session_id
///
/// Явное удаление сессии вместе с незаконченной раздачей.
pub async fn evict_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .sessions
        .lock()
        .await
        .evict(&session_id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(ApiError::SessionNotFound(session_id))
}

/// GET /sessions/:session_id/review/:player
///
/// Разбор текущей (обычно только что сыгранной) раздачи для игрока.
pub async fn review_hand(
    State(state): State<AppState>,
    Path((session_id, player)): Path<(String, String)>,
) -> Result<Json<ReviewDto>, ApiError> {
    let history = {
        let sessions = state.sessions.lock().await;
        let session = sessions
            .get(&session_id)
            .ok_or_else(|| ApiError::SessionNotFound(session_id.clone()))?;
        session.state.history().as_slice().to_vec()
    };

    let review = state.advisor.review_hand(&history, &player).await?;
    Ok(Json(ReviewDto { player, review }))
}

/// Карты, найденные на снимке стола.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ImageAnalysisDto {
    pub player_cards: Vec<RecognizedCard>,
    pub community_cards: Vec<RecognizedCard>,
}

/// POST /analyze-image
///
/// Снять область стола один раз и распознать карты в настроенных областях.
/// Пока распознавания нет, отвечает 501.
pub async fn analyze_image(State(state): State<AppState>) -> Result<Json<ImageAnalysisDto>, ApiError> {
    let frame = capture_checked(state.screen.as_ref(), state.capture_region)?;

    let analysis = ImageAnalysisDto {
        player_cards: detect_in_regions(&state, &frame, &state.card_regions.player_cards)?,
        community_cards: detect_in_regions(&state, &frame, &state.card_regions.community_cards)?,
    };
    info!(
        player = analysis.player_cards.len(),
        community = analysis.community_cards.len(),
        "image analyzed"
    );
    Ok(Json(analysis))
}

/// Области заданы в координатах экрана, кадр снят с `capture_region`.
fn detect_in_regions(state: &AppState, frame: &Frame, regions: &[ScreenRegion]) -> Result<Vec<RecognizedCard>, ApiError> {
    let mut found = Vec::new();
    for region in regions {
        let local = region
            .relative_to(state.capture_region)
            .ok_or(VisionError::RegionOffScreen(*region))?;
        let crop = frame.crop(local)?;
        found.extend(state.recognizer.detect_cards(&crop)?);
    }
    Ok(found)
}

/// GET /hand-history/:hand_id
pub async fn get_hand_history(
    State(state): State<AppState>,
    Path(hand_id): Path<HandId>,
) -> Result<Json<HandHistoryRecord>, ApiError> {
    state
        .store
        .lock()
        .await
        .hand_history(hand_id)
        .map(Json)
        .ok_or(ApiError::HandNotFound(hand_id))
}

/// GET /player-stats/:player_name
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path(player_name): Path<String>,
) -> Json<PlayerStats> {
    Json(state.store.lock().await.player_stats(&player_name))
}

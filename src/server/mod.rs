//! Транспорт: WebSocket для живых обновлений и REST для истории/статистики.

pub mod flow;
pub mod handlers;
pub mod ws;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::routing::post;
use axum::{Json, Router};
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

use crate::advisor::{AnthropicClient, DisabledAdvisor, SuggestionSource};
use crate::api::ApiError;
use crate::infra::config::AppConfig;
use crate::infra::persistence::{HandStore, InMemoryHandStore};
use crate::infra::sessions::SessionRegistry;
use crate::vision::{CardRecognizer, CardRegions, ScreenRegion, ScreenSource, UnavailableVision};

/// Общее состояние сервера. Клонируется на каждый запрос (внутри только `Arc`).
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<SessionRegistry>>,
    pub store: Arc<Mutex<dyn HandStore>>,
    pub advisor: Arc<dyn SuggestionSource>,
    pub screen: Arc<dyn ScreenSource>,
    pub recognizer: Arc<dyn CardRecognizer>,
    pub capture_region: ScreenRegion,
    pub card_regions: CardRegions,
}

impl AppState {
    /// Состояние с in-memory хранилищем и заглушками распознавания.
    pub fn new(advisor: Arc<dyn SuggestionSource>, capture_region: ScreenRegion) -> Self {
        let vision = Arc::new(UnavailableVision);
        Self {
            sessions: Arc::new(Mutex::new(SessionRegistry::new())),
            store: Arc::new(Mutex::new(InMemoryHandStore::new())),
            advisor,
            screen: vision.clone(),
            recognizer: vision,
            capture_region,
            card_regions: CardRegions::default(),
        }
    }

    /// Собрать состояние из конфигурации: без ключа API советник выключен.
    pub fn from_config(config: &AppConfig) -> Self {
        let advisor: Arc<dyn SuggestionSource> = match &config.api_key {
            Some(key) => Arc::new(AnthropicClient::new(key.clone(), config.advisor.clone())),
            None => {
                tracing::warn!("CLAUDE_API_KEY not set, suggestions disabled");
                Arc::new(DisabledAdvisor)
            }
        };
        Self::new(advisor, config.capture_region)
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/ws/:session_id", get(ws::ws_handler))
        .route(
            "/sessions/:session_id",
            get(handlers::get_session_state).delete(handlers::evict_session),
        )
        .route("/sessions/:session_id/review/:player", get(handlers::review_hand))
        .route("/analyze-image", post(handlers::analyze_image))
        .route("/hand-history/:hand_id", get(handlers::get_hand_history))
        .route("/player-stats/:player_name", get(handlers::get_player_stats))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::SessionNotFound(_) | ApiError::HandNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::AdvisorUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::VisionUnavailable(_) => StatusCode::NOT_IMPLEMENTED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

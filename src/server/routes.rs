//! HTTP routes of the word service

use super::config::ServerConfig;
use super::daily::daily_word;
use axum::{Json, Router, extract::State, routing::get};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Body of `GET /api/daily-word`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWordResponse {
    pub word: String,
}

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Shared state for the handlers
#[derive(Clone)]
pub struct AppState {
    solutions: Arc<[&'static str]>,
    epoch: NaiveDate,
    today: fn() -> NaiveDate,
}

impl AppState {
    /// State that reads today's date from the system clock (UTC)
    #[must_use]
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_clock(config, || Utc::now().date_naive())
    }

    /// State with an explicit clock
    #[must_use]
    pub fn with_clock(config: &ServerConfig, today: fn() -> NaiveDate) -> Self {
        Self {
            solutions: config.solutions.clone().into(),
            epoch: config.epoch,
            today,
        }
    }
}

/// Today's solution, lower case
pub async fn get_daily_word(State(state): State<AppState>) -> Json<DailyWordResponse> {
    let today = (state.today)();
    let word = daily_word(today, state.epoch, &state.solutions);
    tracing::info!(%today, "served daily word");

    Json(DailyWordResponse {
        word: word.to_ascii_lowercase(),
    })
}

/// Liveness check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Create the service router
///
/// The word route lives under `/api` so the full path is `/api/daily-word`.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new().route("/daily-word", get(get_daily_word));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

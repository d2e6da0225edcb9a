//! HTTP surface of lemmastat.
//!
//! - `POST /api/analyze` with `{"text": "..."}` returns the [AnalyzeResponse] of the text.
//! - `GET /api/health` reports liveness and the model status of each supported language.
//!
//! Any origin may call the API, so a separately hosted front end works without a proxy.
//! Every error response has the form `{"detail": "..."}`, see [ApiError].

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use lemmastat::{registry::ModelStatus, AnalyzeResponse, Analyzer, Language};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::Arc, time::Duration};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod error;

pub use config::ServerConfig;
pub use error::ApiError;

/// Room for the JSON envelope around the text, so that oversized texts reach the analyzer and get a 413 from it.
const BODY_SLACK: usize = 64 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub models: BTreeMap<Language, ModelStatus>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    analyzer: Arc<Analyzer>,
    timeout: Duration,
}

impl AppState {
    pub fn new(analyzer: Arc<Analyzer>, timeout: Duration) -> Self {
        AppState { analyzer, timeout }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }
}

pub fn app(state: AppState) -> Router {
    let body_limit = state
        .analyzer
        .config()
        .max_text_bytes
        .saturating_add(BODY_SLACK);

    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/health", get(health))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload?;
    let analyzer = state.analyzer.clone();

    // lemmatization is CPU-bound and model acquisition may block on I/O
    let task = tokio::task::spawn_blocking(move || analyzer.analyze(&request.text));

    match tokio::time::timeout(state.timeout, task).await {
        Ok(Ok(result)) => Ok(Json(result?)),
        Ok(Err(error)) => {
            log::error!("analysis task failed: {}", error);
            Err(ApiError::Internal)
        }
        Err(_) => Err(ApiError::Timeout),
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.analyzer.registry();

    Json(HealthResponse {
        status: "ok",
        models: Language::supported()
            .iter()
            .map(|language| (*language, registry.status(*language)))
            .collect(),
    })
}

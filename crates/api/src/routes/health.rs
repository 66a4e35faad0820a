//! Liveness endpoint: process up, database reachable.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::AppResult;
use crate::state::AppState;

/// Root-level health route (not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/healthz", get(health))
}

/// GET /healthz
async fn health(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    pawprints_db::health_check(&state.pool).await?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}

//! Health check route
//!
//! `GET /health` pings the store: 200 `{"status":"ok","version":...}` when it
//! answers, the usual 500 error body when it does not.

use axum::{Json, Router, extract::State, routing::get};
use shared::response::HealthResponse;

use crate::core::ServerState;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthResponse>> {
    state.store.ping().await?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

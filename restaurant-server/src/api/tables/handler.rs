//! Dining Table API Handlers

use axum::{Json, extract::State};
use shared::models::DiningTable;

use crate::core::ServerState;
use crate::db::repository::DiningTableRepository;
use crate::utils::AppResult;

/// GET /tables - every dining table
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.store.clone());
    let tables = repo.find_all().await?;
    Ok(Json(tables))
}

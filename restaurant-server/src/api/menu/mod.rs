//! Menu API

use axum::{Json, Router, extract::State, routing::get};
use shared::models::MenuItem;

use crate::core::ServerState;
use crate::db::repository::MenuItemRepository;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/menu", get(list))
}

/// GET /menu - every menu item
async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.store.clone());
    Ok(Json(repo.find_all().await?))
}

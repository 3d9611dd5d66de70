//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::ErrorCode;
use shared::models::Order;
use shared::request::OrderRequest;
use shared::response::{MessageResponse, OrderCreated};

use crate::api::extract::Payload;
use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::utils::validation::validate_order;
use crate::utils::{AppError, AppResult};

/// POST /order - validate and store an order
pub async fn create(
    State(state): State<ServerState>,
    Payload(req): Payload<OrderRequest>,
) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    let data = validate_order(req).inspect_err(|e| {
        tracing::warn!(error = %e, "Order rejected");
    })?;

    let repo = OrderRepository::new(state.store.clone());
    let requester = data.requester_name.clone();
    let dishes = data.dishes.len();
    let order_id = repo.create(data).await?;

    tracing::info!(order_id = %order_id, requester = %requester, dishes, "Order created");

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "Order created successfully".to_string(),
            order_id,
        }),
    ))
}

/// GET /orders - every order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.store.clone());
    let orders = repo.find_all().await?;
    Ok(Json(orders))
}

/// DELETE /order/{id}
///
/// An id the store cannot parse is a server error, not a 404.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = OrderRepository::new(state.store.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::new(ErrorCode::OrderNotFound).with_detail("id", id));
    }

    tracing::info!(order_id = %id, "Order deleted");
    Ok(Json(MessageResponse::new("Order deleted successfully")))
}

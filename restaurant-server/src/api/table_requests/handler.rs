//! Table Request API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::error::ErrorCode;
use shared::models::TableRequest;
use shared::request::TableRequestRequest;
use shared::response::{MessageResponse, TableRequestCreated};

use crate::api::extract::Payload;
use crate::core::ServerState;
use crate::db::repository::TableRequestRepository;
use crate::utils::validation::validate_table_request;
use crate::utils::{AppError, AppResult};

/// POST /table-request
///
/// The table number is stored as sent; it is not checked against `tables`.
pub async fn create(
    State(state): State<ServerState>,
    Payload(req): Payload<TableRequestRequest>,
) -> AppResult<(StatusCode, Json<TableRequestCreated>)> {
    let data = validate_table_request(req).inspect_err(|e| {
        tracing::warn!(error = %e, "Table request rejected");
    })?;

    let repo = TableRequestRepository::new(state.store.clone());
    let table = data.table_number.clone();
    let request_id = repo.create(data).await?;

    tracing::info!(request_id = %request_id, table = %table, "Table request created");

    Ok((
        StatusCode::CREATED,
        Json(TableRequestCreated {
            message: "Table request created successfully".to_string(),
            request_id,
        }),
    ))
}

/// GET /table-requests
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TableRequest>>> {
    let repo = TableRequestRepository::new(state.store.clone());
    Ok(Json(repo.find_all().await?))
}

/// DELETE /table-request/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let repo = TableRequestRepository::new(state.store.clone());
    if !repo.delete(&id).await? {
        return Err(AppError::new(ErrorCode::TableRequestNotFound).with_detail("id", id));
    }

    tracing::info!(request_id = %id, "Table request deleted");
    Ok(Json(MessageResponse::new("Table request deleted successfully")))
}

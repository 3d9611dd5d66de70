//! Authentication Handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::error::ErrorCode;
use shared::request::{LoginRequest, SignupRequest};
use shared::response::{LoginResponse, MessageResponse};

use crate::api::extract::Payload;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::validation::validate_signup;
use crate::utils::{AppError, AppResult};

/// POST /login
///
/// Username and password must both match a stored user exactly. Missing
/// fields and unreadable bodies are treated like a wrong password.
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Payload<LoginRequest>, AppError>,
) -> AppResult<Json<LoginResponse>> {
    let Payload(req) = payload.map_err(|e| {
        tracing::warn!(error = %e, "Login rejected: unreadable body");
        AppError::invalid_credentials()
    })?;

    let (Some(username), Some(password)) = (req.login_username, req.login_password) else {
        tracing::warn!("Login rejected: missing credentials");
        return Err(AppError::invalid_credentials());
    };

    let repo = UserRepository::new(state.store.clone());
    let user = repo
        .find_by_credentials(&username, &password)
        .await?
        .ok_or_else(|| {
            tracing::warn!(username = %username, "Login failed");
            AppError::invalid_credentials()
        })?;

    tracing::info!(username = %user.username, "User logged in");

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        redirect_url: state.config.redirect_for(&user.username).to_string(),
    }))
}

/// POST /signup
///
/// The uniqueness check and the insert are two separate store calls, so two
/// concurrent signups for the same name can both succeed.
pub async fn signup(
    State(state): State<ServerState>,
    Payload(req): Payload<SignupRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let data = validate_signup(req)?;

    let repo = UserRepository::new(state.store.clone());
    if repo.find_by_username(&data.username).await?.is_some() {
        tracing::warn!(username = %data.username, "Signup rejected: username taken");
        return Err(AppError::new(ErrorCode::UsernameTaken).with_detail("username", data.username));
    }

    let username = data.username.clone();
    let id = repo.create(data).await?;
    tracing::info!(username = %username, id = %id, "User signed up");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Signup successful")),
    ))
}

//! Authentication API
//!
//! | path | method | description |
//! |------|--------|-------------|
//! | /login | POST | check credentials, answer with a redirect target |
//! | /signup | POST | register a new user |
//!
//! No session or token is issued; each call stands alone.

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/signup", post(handler::signup))
}

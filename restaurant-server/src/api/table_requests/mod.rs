//! Table Request API
//!
//! | path | method | description |
//! |------|--------|-------------|
//! | /table-request | POST | request a table |
//! | /table-requests | GET | list requests |
//! | /table-request/{id} | DELETE | remove a request |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/table-request", post(handler::create))
        .route("/table-requests", get(handler::list))
        .route("/table-request/{id}", delete(handler::delete))
}

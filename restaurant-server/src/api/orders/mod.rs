//! Order API
//!
//! | path | method | description |
//! |------|--------|-------------|
//! | /order | POST | submit an order |
//! | /orders | GET | list orders |
//! | /order/{id} | DELETE | remove an order |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/order", post(handler::create))
        .route("/orders", get(handler::list))
        .route("/order/{id}", delete(handler::delete))
}

//! Shared types for the restaurant API
//!
//! Entity models, request/response payloads and the unified error type used
//! by the server and by any client talking to it.

pub mod error;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};

//! Response payloads
//!
//! Success bodies of the write and login endpoints. List endpoints return
//! bare JSON arrays of documents; failures use [`crate::ErrorBody`].

use serde::{Deserialize, Serialize};

/// Body with only a confirmation message (signup, deletes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// POST /login success body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub redirect_url: String,
}

/// POST /order success body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub message: String,
    pub order_id: String,
}

/// POST /table-request success body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRequestCreated {
    pub message: String,
    pub request_id: String,
}

/// GET /health body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

//! Request payloads
//!
//! Every field is optional so that a missing field is reported as a
//! validation error by the handler rather than as a body parse failure.
//! The kebab-case aliases are the field names the HTML login and signup
//! forms post.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::TableNumber;

/// POST /login
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default, alias = "login-username")]
    pub login_username: Option<String>,
    #[serde(default, alias = "login-password")]
    pub login_password: Option<String>,
}

/// POST /signup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default, alias = "signup-username")]
    pub signup_username: Option<String>,
    #[serde(default, alias = "signup-password")]
    pub signup_password: Option<String>,
}

/// POST /order
///
/// `dishes` and `totalPrice` stay untyped until validation so that a wrong
/// JSON type produces a precise message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub requester_name: Option<String>,
    #[serde(default)]
    pub dishes: Option<Value>,
    #[serde(default)]
    pub total_price: Option<Value>,
}

/// POST /table-request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRequestRequest {
    #[serde(default)]
    pub requester_name: Option<String>,
    #[serde(default)]
    pub table_number: Option<TableNumber>,
}

//! Order Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference to a dish in an order
///
/// Usually the dish name, sometimes a full menu entry. Not checked against
/// the menu collection.
pub type DishRef = Value;

/// Submitted order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub requester_name: String,
    pub dishes: Vec<DishRef>,
    pub total_price: f64,
}

/// Create order payload (already validated)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub requester_name: String,
    pub dishes: Vec<DishRef>,
    pub total_price: f64,
}

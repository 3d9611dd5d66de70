//! Dining Table Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dining table entity (collection `tables`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}
